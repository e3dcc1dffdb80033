//! 관측 신호 모델.
//!
//! 호스트 관측 설비가 콜백으로 전달하는 원시 페이로드와
//! 배치 스캔용 리소스 타이밍 엔트리를 정의.

use serde::{Deserialize, Serialize};

/// 관측 신호 계열 — 계열마다 콜백 하나를 등록한다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalFamily {
    /// 최대 콘텐츠 페인트
    LargestPaint,
    /// 첫 페인트
    FirstPaint,
    /// 첫 입력 지연
    InputDelay,
    /// 레이아웃 이동
    LayoutShift,
    /// 내비게이션 타이밍 (TTI 추정)
    Navigation,
}

/// 콜백으로 전달되는 원시 관측값
///
/// 계열과 페이로드가 맞지 않으면 수집기는 해당 관측을 무시한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// 단발성 타이밍 (페인트 / 입력 지연, ms)
    Timing {
        /// 경과 시간 (ms)
        elapsed_ms: f64,
    },
    /// 레이아웃 이동 관측
    LayoutShift {
        /// 이동 점수 (무단위)
        value: f64,
        /// 직전 사용자 입력에 의한 이동 여부 — true면 누적에서 제외
        had_recent_input: bool,
    },
    /// 내비게이션 타이밍
    Navigation {
        /// DOM interactive 시점 (ms)
        dom_interactive_ms: f64,
    },
}

/// 리소스 로드 타이밍 엔트리 (배치 스캔 입력)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// 리소스 URL
    pub url: String,
    /// 로드 소요 시간 (ms)
    pub duration_ms: f64,
}
