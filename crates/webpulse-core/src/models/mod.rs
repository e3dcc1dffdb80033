//! 도메인 데이터 구조체 (serde Serialize/Deserialize).

pub mod event;
pub mod observation;
pub mod report;
pub mod sample;
pub mod threshold;
