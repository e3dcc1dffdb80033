//! WEBPULSE 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 실패를 `CoreError`로 매핑한다.
//! 수집기 경계 밖으로는 어떤 에러도 전파되지 않는다 — 경계에서
//! 로그 후 무시하는 것이 계약이다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 직렬화, 관측 등록, 저장소, 샘플 유효성 등 공통 실패를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 호스트가 해당 관측 신호를 지원하지 않음
    #[error("지원되지 않는 관측 신호: {family}")]
    UnsupportedSignal {
        /// 등록 실패한 신호 계열
        family: String,
    },

    /// 스냅샷 저장소 쓰기/읽기 실패 (쿼터 초과, 저장소 불가 등)
    #[error("저장소 에러: {0}")]
    Persistence(String),

    /// 유한하지 않거나 음수인 측정값
    #[error("잘못된 샘플 — {name}: {value}")]
    MalformedSample {
        /// 메트릭 이름
        name: String,
        /// 거부된 측정값
        value: f64,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (싱크 전송 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
