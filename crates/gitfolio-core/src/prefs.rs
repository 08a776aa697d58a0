use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// A tiny string key-value slot store, the terminal's stand-in for localStorage
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> crate::Result<()>;
}

/// Preferences persisted as a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store in the platform data directory
    pub fn open_default() -> crate::Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open the store at `path`. A missing file is an empty store; so is an
    /// unreadable one, which gets overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> crate::Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// XDG data dir on Unix-like systems, AppData on Windows
    fn default_path() -> crate::Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find data directory".into()))?
            .join("gitfolio");

        Ok(data_dir.join("preferences.json"))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store for tests and for when the data directory is unusable
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set("theme", "light").unwrap();

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme"), Some("light".to_string()));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\": \"light\""));
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(
            FilePreferenceStore::open(&path).unwrap().get("theme"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::with("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }
}
