//! Storage capability for computed closures.

use crate::error::StoreError;
use rustc_hash::FxHashMap;
use std::sync::RwLock;

/// Identifies one cached closure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub notation: String,
    pub formula: String,
}

impl CacheKey {
    pub fn new(notation: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            formula: formula.into(),
        }
    }
}

/// Where computed closures live between calls.
///
/// Entries are never invalidated. Two writers racing on one key store the same
/// value, so the last write winning is fine.
pub trait StorageBackend: Send + Sync {
    /// `Ok(None)` on a miss.
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, StoreError>;

    fn set(&self, key: &CacheKey, closure: &[String]) -> Result<(), StoreError>;

    /// Whether entries outlive the process. Explicit saves are refused
    /// otherwise.
    fn is_persistent(&self) -> bool;

    fn name(&self) -> &'static str;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &CacheKey, closure: &[String]) -> Result<(), StoreError> {
        (**self).set(key, closure)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Process-local cache.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<CacheKey, Vec<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, StoreError> {
        // A poisoned lock still holds complete entries.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &CacheKey, closure: &[String]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.clone(), closure.to_vec());
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_miss_then_hit() {
        let backend = MemoryBackend::new();
        let key = CacheKey::new("cambridge", "(P∧Q)");
        assert_eq!(backend.get(&key).unwrap(), None);

        let closure = vec!["(P∧Q)".to_string(), "(Q∧P)".to_string()];
        backend.set(&key, &closure).unwrap();
        assert_eq!(backend.get(&key).unwrap(), Some(closure));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_keys_are_per_notation() {
        let backend = MemoryBackend::new();
        backend
            .set(&CacheKey::new("cambridge", "P"), &["P".to_string()])
            .unwrap();
        assert_eq!(backend.get(&CacheKey::new("hardegree", "P")).unwrap(), None);
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let backend = std::sync::Arc::new(MemoryBackend::new());
        let key = CacheKey::new("cambridge", "P");
        backend.set(&key, &["P".to_string()]).unwrap();

        let poisoner = std::sync::Arc::clone(&backend);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(backend.entries.is_poisoned());

        assert_eq!(backend.get(&key).unwrap(), Some(vec!["P".to_string()]));
        assert_eq!(backend.len(), 1);
        assert!(!backend.is_empty());
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let backend: Box<dyn StorageBackend> = Box::new(MemoryBackend::new());
        assert_eq!(backend.name(), "memory");
        assert!(!backend.is_persistent());
        let key = CacheKey::new("cambridge", "P");
        backend.set(&key, &["P".to_string()]).unwrap();
        assert_eq!(backend.get(&key).unwrap(), Some(vec!["P".to_string()]));
    }
}
