//! # webpulse-storage
//!
//! 로컬 저장소 어댑터.
//! 직렬화된 이력/리포트 스냅샷을 담는 불투명 키-값 저장소 구현.
//!
//! ## 모듈
//! - [`sqlite`] — 파일/인메모리 SQLite 저장소 (SnapshotStore 구현)
//! - [`memory`] — HashMap 기반 저장소 (테스트, 비영속 호스트)
//! - [`migration`] — 스키마 마이그레이션

pub mod memory;
pub mod migration;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
