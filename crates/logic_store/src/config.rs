//! Store configuration, read from TOML.
//!
//! ```toml
//! notation = "hardegree"
//! backend = "file"
//! data_root = "/var/lib/logic"
//! ```

use crate::backend::{MemoryBackend, StorageBackend};
use crate::error::ConfigError;
use crate::file_backend::FileBackend;
use crate::store::EquivalenceStore;
use logic_ast::Notation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Notation used when a caller does not name one.
    pub notation: String,
    pub backend: BackendKind,
    /// Directory holding `equivalents/`; required by the file backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            notation: Notation::default_notation().name.to_string(),
            backend: BackendKind::Memory,
            data_root: None,
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`StoreConfig::load`], but any problem falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unusable store config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve_notation()?;
        if self.backend == BackendKind::File && self.data_root.is_none() {
            return Err(ConfigError::MissingDataRoot);
        }
        Ok(())
    }

    pub fn resolve_notation(&self) -> Result<&'static Notation, ConfigError> {
        Notation::by_name(&self.notation)
            .ok_or_else(|| ConfigError::UnknownNotation(self.notation.clone()))
    }
}

impl EquivalenceStore {
    /// Builds the backend `config` names. A missing `data_root` directory is
    /// created.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        let notation = config.resolve_notation()?;
        let backend: Box<dyn StorageBackend> = match config.backend {
            BackendKind::Memory => Box::new(MemoryBackend::new()),
            BackendKind::File => {
                let root = config.data_root.as_ref().ok_or(ConfigError::MissingDataRoot)?;
                if root.exists() && !root.is_dir() {
                    return Err(ConfigError::NotADirectory(root.clone()));
                }
                fs::create_dir_all(root)?;
                Box::new(FileBackend::new(root))
            }
        };
        info!(backend = backend.name(), notation = notation.name, "equivalence store ready");
        Ok(Self::with_notation(backend, notation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.notation, "cambridge");
        assert_eq!(config.backend, BackendKind::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: StoreConfig = toml::from_str(r#"notation = "bergmann""#).unwrap();
        assert_eq!(config.notation, "bergmann");
        assert_eq!(config.backend, BackendKind::Memory);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        let config = StoreConfig {
            notation: "hardegree".to_string(),
            backend: BackendKind::File,
            data_root: Some(dir.path().join("data")),
        };
        config.save(&path).unwrap();
        assert_eq!(StoreConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_file_backend_needs_root() {
        let config: StoreConfig = toml::from_str(r#"backend = "file""#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingDataRoot)));
        assert!(matches!(
            EquivalenceStore::from_config(&config),
            Err(ConfigError::MissingDataRoot)
        ));
    }

    #[test]
    fn test_unknown_notation_rejected() {
        let config = StoreConfig {
            notation: "polish".to_string(),
            ..StoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::UnknownNotation(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        assert_eq!(StoreConfig::load_or_default(&path), StoreConfig::default());

        fs::write(&path, "backend = 3").unwrap();
        assert_eq!(StoreConfig::load_or_default(&path), StoreConfig::default());
    }

    #[test]
    fn test_from_config_uses_notation_and_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            notation: "bergmann".to_string(),
            backend: BackendKind::File,
            data_root: Some(dir.path().join("cache")),
        };
        let store = EquivalenceStore::from_config(&config).unwrap();
        assert_eq!(store.notation().name, "bergmann");
        assert!(store.backend().is_persistent());

        let closure = store.load("(P⊃Q)").unwrap();
        assert!(closure.contains(&"(~Q⊃~P)".to_string()));
        assert!(dir
            .path()
            .join("cache/equivalents/bergmann/(P⊃Q).json")
            .is_file());
    }
}
