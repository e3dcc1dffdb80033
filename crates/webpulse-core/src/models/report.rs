//! 요약/리포트 모델.
//!
//! 이력에서 파생되는 메트릭별 최신값 요약과, 주기적으로 영속화되는
//! 리포트 스냅샷을 정의.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sample::{MetricSample, Rating};

/// 메트릭 하나의 최신 상태 (요약 항목)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// 최신 측정값
    pub value: f64,
    /// 최신 등급
    pub rating: Rating,
    /// 양호 등급 여부 (점수 계산용)
    pub is_good: bool,
}

/// 메트릭 이름 → 최신 요약. 이력에서 매번 재계산되며 독립 영속화되지 않는다.
pub type PerformanceSummary = BTreeMap<String, MetricSummary>;

/// 영속화되는 성능 리포트 스냅샷
///
/// 주기 타이머와 화면 이탈(visibility-loss) 두 트리거가 독립적으로
/// 생성하며, 저장소에는 항상 마지막 쓰기가 남는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// 리포트 식별자
    pub report_id: Uuid,
    /// 수집기 세션 식별자
    pub session_id: Uuid,
    /// 생성 시각
    pub timestamp: DateTime<Utc>,
    /// 리포트 생성 시점의 위치 문자열 (호스트 제공)
    pub source_location: String,
    /// 이력의 최근 샘플 (최대 10개)
    pub recent_samples: Vec<MetricSample>,
    /// 메트릭별 최신 요약
    pub summary: PerformanceSummary,
}
