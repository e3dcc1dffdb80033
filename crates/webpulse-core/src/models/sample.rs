//! 샘플 모델.
//!
//! 관측된 메트릭 하나의 측정값과 파생 등급을 정의.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::threshold::Threshold;

/// 추적 대상 메트릭 이름 상수.
///
/// 고정 집합이지만 샘플 이름 자체는 문자열 — 미등록 이름은
/// 기본 임계값으로 등급이 매겨진다.
pub mod metric {
    /// 최대 콘텐츠 페인트 지연 (ms)
    pub const LARGEST_PAINT_DELAY: &str = "largest-paint-delay";
    /// 첫 페인트 지연 (ms)
    pub const FIRST_PAINT_DELAY: &str = "first-paint-delay";
    /// 첫 입력 응답 지연 (ms)
    pub const INPUT_RESPONSIVENESS_DELAY: &str = "input-responsiveness-delay";
    /// 누적 레이아웃 이동 점수 (무단위)
    pub const LAYOUT_SHIFT_SCORE: &str = "layout-shift-score";
    /// 상호작용 가능 시점 (ms, 내비게이션 타이밍 추정)
    pub const TIME_TO_INTERACTIVE: &str = "time-to-interactive";
    /// 느린 리소스 로드 (ms, 배치 스캔으로 감지)
    pub const SLOW_RESOURCE: &str = "slow-resource";
}

/// 샘플 등급 — 고정 임계값으로부터 파생
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// 양호 (value <= good_ceiling)
    Good,
    /// 개선 필요 (good_ceiling < value <= poor_ceiling)
    NeedsImprovement,
    /// 불량 (value > poor_ceiling)
    Poor,
}

impl Rating {
    /// 양호 등급 여부
    pub fn is_good(self) -> bool {
        self == Rating::Good
    }
}

/// 단일 메트릭 샘플
///
/// `rating`은 항상 `(name, value)`와 임계값 테이블의 순수 함수 —
/// 생성자 외의 경로로 설정되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// 메트릭 이름 (예: "largest-paint-delay")
    pub name: String,
    /// 측정값 (타이밍 메트릭은 ms, 이동 점수는 무단위)
    pub value: f64,
    /// 파생 등급
    pub rating: Rating,
    /// 관측 시각
    pub observed_at: DateTime<Utc>,
}

impl MetricSample {
    /// 측정값으로부터 등급을 파생하여 샘플 생성
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let rating = Threshold::for_metric(&name).rate(value);
        Self {
            name,
            value,
            rating,
            observed_at: Utc::now(),
        }
    }
}
