//! 인메모리 스냅샷 저장소.
//!
//! 영속 저장소가 없는 호스트와 테스트용 `SnapshotStore` 구현.

use std::collections::HashMap;

use parking_lot::RwLock;

use webpulse_core::error::CoreError;
use webpulse_core::ports::store::SnapshotStore;

/// HashMap 기반 스냅샷 저장소
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// 새 인메모리 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키 개수
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// 저장소가 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
