//! 스냅샷 저장소 포트.
//!
//! 구현: `webpulse-storage` crate (rusqlite / 인메모리).
//! 트랜잭션도 스키마 버전도 없는 불투명 키-값 get/set.

use crate::error::CoreError;

/// 직렬화된 이력이 저장되는 키 — 샘플마다 덮어쓴다
pub const HISTORY_KEY: &str = "performance_metrics";

/// 직렬화된 최신 리포트가 저장되는 키 — report()마다 덮어쓴다
pub const REPORT_KEY: &str = "latest_performance_report";

/// 키-값 스냅샷 저장소
///
/// 쓰기는 best-effort — 실패해도 다음 성공 쓰기가 현재 상태를 반영한다.
pub trait SnapshotStore: Send + Sync {
    /// 키로 값 조회
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// 값 저장 (기존 값 덮어쓰기)
    fn put(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// 키 삭제
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}
