//! 등급 임계값 테이블.
//!
//! 메트릭 이름 → (good_ceiling, poor_ceiling) 정적 매핑.
//! 프로세스 전역에서 공유되는 불변 테이블이며, 등급 분류는
//! `(name, value)`만의 순수 함수다.

use serde::{Deserialize, Serialize};

use crate::models::sample::{metric, Rating};

/// 미등록 메트릭 이름에 적용되는 기본 임계값
pub const DEFAULT_THRESHOLD: Threshold = Threshold::new(1000.0, 2000.0);

/// 등급 임계값 — good/poor 상한 쌍
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// 이 값 이하이면 good (경계 포함)
    pub good_ceiling: f64,
    /// 이 값 이하이면 needs-improvement, 초과하면 poor
    pub poor_ceiling: f64,
}

impl Threshold {
    /// 새 임계값 생성
    pub const fn new(good_ceiling: f64, poor_ceiling: f64) -> Self {
        Self {
            good_ceiling,
            poor_ceiling,
        }
    }

    /// 메트릭 이름에 대한 임계값 조회
    ///
    /// 미등록 이름은 [`DEFAULT_THRESHOLD`]로 폴백한다.
    /// slow-resource는 중간 등급 없이 1초 초과를 모두 poor로 본다.
    pub fn for_metric(name: &str) -> Threshold {
        match name {
            metric::LARGEST_PAINT_DELAY => Threshold::new(2500.0, 4000.0),
            metric::FIRST_PAINT_DELAY => Threshold::new(1800.0, 3000.0),
            metric::INPUT_RESPONSIVENESS_DELAY => Threshold::new(100.0, 300.0),
            metric::LAYOUT_SHIFT_SCORE => Threshold::new(0.1, 0.25),
            metric::TIME_TO_INTERACTIVE => Threshold::new(3800.0, 7300.0),
            metric::SLOW_RESOURCE => Threshold::new(1000.0, 1000.0),
            _ => DEFAULT_THRESHOLD,
        }
    }

    /// 측정값 등급 분류 (good 쪽 경계 포함)
    pub fn rate(&self, value: f64) -> Rating {
        if value <= self.good_ceiling {
            Rating::Good
        } else if value <= self.poor_ceiling {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

/// `(name, value)` → 등급. 임계값 테이블만 참조하는 순수 함수.
pub fn rate(name: &str, value: f64) -> Rating {
    Threshold::for_metric(name).rate(value)
}
