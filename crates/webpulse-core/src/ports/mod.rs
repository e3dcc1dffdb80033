//! Hexagonal Architecture 포트 인터페이스.

pub mod observation;
pub mod sink;
pub mod store;
