//! 수집기/싱크/저장소 설정 구조체.
//!
//! 모든 값은 생성자에 명시적으로 전달된다 — 수집기 내부에서
//! 환경변수를 읽지 않는다. 기본값은 serde default 함수로 문서화.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 수집기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// 아웃바운드 싱크 수신처 식별자 (빌드 시 주입, 없으면 기본값)
    #[serde(default = "default_destination_id")]
    pub destination_id: String,
    /// 이력 최대 보관 샘플 수 (FIFO 축출)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// 주기 리포트 간격 (밀리초)
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,
    /// 느린 리소스 판정 임계값 (밀리초)
    #[serde(default = "default_slow_resource_threshold_ms")]
    pub slow_resource_threshold_ms: f64,
    /// 리포트에 포함할 최근 샘플 수
    #[serde(default = "default_recent_samples_in_report")]
    pub recent_samples_in_report: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            destination_id: default_destination_id(),
            history_limit: default_history_limit(),
            report_interval_ms: default_report_interval_ms(),
            slow_resource_threshold_ms: default_slow_resource_threshold_ms(),
            recent_samples_in_report: default_recent_samples_in_report(),
        }
    }
}

impl CollectorConfig {
    /// 리포트 주기를 Duration으로 반환
    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }
}

/// 배치 HTTP 싱크 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// 수집 엔드포인트 URL
    #[serde(default = "default_sink_endpoint")]
    pub endpoint: String,
    /// 수신처 식별자
    #[serde(default = "default_destination_id")]
    pub destination_id: String,
    /// 배치당 최대 이벤트 수
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// 전송 실패 시 최대 재시도 횟수
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// flush 루프 주기 (밀리초)
    #[serde(default = "default_flush_interval_ms")]
    pub flush_interval_ms: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            endpoint: default_sink_endpoint(),
            destination_id: default_destination_id(),
            max_batch_size: default_max_batch_size(),
            max_retries: default_max_retries(),
            flush_interval_ms: default_flush_interval_ms(),
        }
    }
}

impl SinkConfig {
    /// flush 주기를 Duration으로 반환
    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }
}

/// 로컬 스냅샷 저장소 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite DB 파일 경로 (None이면 인메모리)
    pub db_path: Option<PathBuf>,
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_destination_id() -> String {
    "webpulse-default".to_string()
}
fn default_history_limit() -> usize {
    50
}
fn default_report_interval_ms() -> u64 {
    30_000
}
fn default_slow_resource_threshold_ms() -> f64 {
    1_000.0
}
fn default_recent_samples_in_report() -> usize {
    10
}
fn default_sink_endpoint() -> String {
    "http://localhost:8000/v1/perf".to_string()
}
fn default_max_batch_size() -> usize {
    20
}
fn default_max_retries() -> u32 {
    2
}
fn default_flush_interval_ms() -> u64 {
    5_000
}
