//! # webpulse-telemetry
//!
//! 아웃바운드 이벤트 싱크 어댑터.
//! 샘플 전달과 회귀 알림은 모두 fire-and-forget — 어떤 싱크 실패도
//! 샘플 기록을 막지 않는다.
//!
//! ## 모듈
//! - [`log_sink`] — tracing 기반 로그 싱크 (기본값)
//! - [`forwarder`] — lock-free 큐 + 배치 HTTP 전달기

pub mod forwarder;
pub mod log_sink;

pub use forwarder::BatchForwarder;
pub use log_sink::LogSink;
