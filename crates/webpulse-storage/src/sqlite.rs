//! SQLite 스냅샷 저장소 어댑터.
//!
//! `SnapshotStore` 포트 구현. 키 하나당 행 하나인 단순 키-값
//! 테이블 — 쓰기는 항상 기존 값을 덮어쓴다.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use webpulse_core::error::CoreError;
use webpulse_core::ports::store::SnapshotStore;

use crate::migration;

/// SQLite 저장소 — `SnapshotStore` 포트 구현
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// 파일 기반 SQLite 저장소 생성
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path)
            .map_err(|e| CoreError::Persistence(format!("SQLite 열기 실패: {e}")))?;

        // 성능 최적화 PRAGMA 설정
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA temp_store=MEMORY;
            ",
        )
        .map_err(|e| CoreError::Persistence(format!("PRAGMA 설정 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Persistence(format!("마이그레이션 실패: {e}")))?;

        info!("SQLite 스냅샷 저장소 초기화: {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// 인메모리 SQLite 저장소 생성 (테스트용)
    pub fn open_in_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CoreError::Persistence(format!("SQLite 열기 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Persistence(format!("마이그레이션 실패: {e}")))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl SnapshotStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        conn.query_row(
            "SELECT value FROM snapshots WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| CoreError::Persistence(format!("스냅샷 조회 실패: {e}")))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        conn.execute(
            "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            rusqlite::params![key, value, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| CoreError::Persistence(format!("스냅샷 저장 실패: {e}")))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CoreError::Internal(format!("잠금 획득 실패: {e}")))?;

        conn.execute(
            "DELETE FROM snapshots WHERE key = ?1",
            rusqlite::params![key],
        )
        .map_err(|e| CoreError::Persistence(format!("스냅샷 삭제 실패: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_overwrite_remove() {
        let store = SqliteStore::open_in_memory().unwrap();

        assert!(store.get("performance_metrics").unwrap().is_none());

        store.put("performance_metrics", "[1]").unwrap();
        assert_eq!(
            store.get("performance_metrics").unwrap().as_deref(),
            Some("[1]")
        );

        // 덮어쓰기 — 버전 관리 없음
        store.put("performance_metrics", "[1,2]").unwrap();
        assert_eq!(
            store.get("performance_metrics").unwrap().as_deref(),
            Some("[1,2]")
        );

        store.remove("performance_metrics").unwrap();
        assert!(store.get("performance_metrics").unwrap().is_none());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.put("latest_performance_report", "{}").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("latest_performance_report").unwrap().as_deref(),
            Some("{}")
        );
    }
}
