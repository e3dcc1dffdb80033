//! 주기 리포트 스케줄러.
//!
//! 수집기가 실행 중인 동안 고정 간격으로 `report()`를 호출하는
//! tokio 태스크. 화면 이탈 훅(`on_hidden`)과는 독립 트리거이며,
//! 둘이 겹쳐도 각각 완주한다.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::collector::PerfCollector;

/// 주기 리포트 태스크 생성.
///
/// 수집기가 중지되면 루프가 끝난다. 반환된 핸들을 abort해도
/// 이미 기록된 상태에는 영향이 없다.
pub fn spawn_periodic_reports(
    collector: Arc<PerfCollector>,
    interval: Duration,
) -> JoinHandle<()> {
    info!("리포트 스케줄러 시작: {}ms 주기", interval.as_millis());

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // 첫 tick은 즉시 반환되므로 건너뛴다
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if !collector.is_running() {
                debug!("수집기 중지됨 — 리포트 루프 종료");
                break;
            }
            collector.report();
        }
    })
}
