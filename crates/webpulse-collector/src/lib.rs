//! # webpulse-collector
//!
//! 브라우저 성능 신호를 관측해 등급을 매기고, 유계 이력을 유지하며,
//! 주기/이벤트 트리거 리포트를 스냅샷 저장소에 영속화하는 수집기.
//!
//! ## 모듈
//! - [`collector`] — `PerfCollector` (관측 등록, 등급 분류, 이력, 리포트)
//! - [`scheduler`] — 주기 리포트 tokio 태스크

pub mod collector;
pub mod scheduler;

pub use collector::PerfCollector;
pub use scheduler::spawn_periodic_reports;
