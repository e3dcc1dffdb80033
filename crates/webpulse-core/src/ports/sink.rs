//! 아웃바운드 이벤트 싱크 포트.
//!
//! 구현: `webpulse-telemetry` crate (로그 싱크, 배치 HTTP 전달).

use crate::models::event::SinkEvent;

/// fire-and-forget 이벤트 싱크
///
/// 반환값이 없다 — 전달 보장이 계약에 없으므로 실패는 구현체가
/// 내부에서 로그로 처리한다.
pub trait EventSink: Send + Sync {
    /// 이벤트 전달
    fn emit(&self, event: SinkEvent);
}
