//! 싱크 이벤트 모델.
//!
//! 아웃바운드 이벤트 싱크로 전달되는 페이로드.
//! 전달은 fire-and-forget — 수신 확인이나 보장이 없다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::sample::{MetricSample, Rating};

/// 싱크로 전달되는 이벤트
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SinkEvent {
    /// 기록된 모든 샘플 (외부 분석 전달용)
    Sample(MetricSample),
    /// poor 등급 샘플에 대한 즉시 회귀 알림
    Regression {
        /// 메트릭 이름
        name: String,
        /// 측정값
        value: f64,
        /// 등급 (항상 poor)
        rating: Rating,
    },
}

/// HTTP 전달용 이벤트 배치
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkEventBatch {
    /// 수신처 식별자
    pub destination_id: String,
    /// 배치 생성 시각
    pub created_at: DateTime<Utc>,
    /// 이벤트 목록
    pub events: Vec<SinkEvent>,
}
