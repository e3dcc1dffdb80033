//! 호스트 관측 설비 포트.
//!
//! 구현: 호스트 런타임 (브라우저 바인딩, 임베더 등).
//! 테스트는 콜백을 동기 호출하는 가짜 구현을 공급한다.

use std::sync::Arc;

use crate::error::CoreError;
use crate::models::observation::{Observation, ResourceEntry, SignalFamily};

/// 관측 콜백 — 호스트가 비동기적으로, 임의 순서/속도로 호출한다
pub type ObservationCallback = Arc<dyn Fn(Observation) + Send + Sync>;

/// 구독 핸들 — disconnect 이후 콜백 호출이 멈춘다 (멱등)
pub trait Subscription: Send {
    /// 구독 해제. 여러 번 호출해도 안전하다.
    fn disconnect(&mut self);
}

/// 호스트 관측 설비
///
/// 신호 계열 하나를 지원하지 않는 호스트는 `subscribe`에서
/// [`CoreError::UnsupportedSignal`]을 반환한다 — 수집기는 해당
/// 계열만 제외하고 계속 동작한다.
pub trait ObservationSource: Send + Sync {
    /// 신호 계열에 콜백 등록
    fn subscribe(
        &self,
        family: SignalFamily,
        callback: ObservationCallback,
    ) -> Result<Box<dyn Subscription>, CoreError>;

    /// 현재까지 기록된 리소스 로드 타이밍 스냅샷 (배치 스캔용)
    fn resource_entries(&self) -> Result<Vec<ResourceEntry>, CoreError>;

    /// 현재 문서/페이지 위치 문자열 (리포트에 포함)
    fn location(&self) -> String;
}
