use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Persistent string key-value storage for session credentials.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn delete(&self, key: &str) -> Result<(), AuthError>;
}

/// Configuration for file-backed storage.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn default_dir() -> PathBuf {
        default_vtrade_dir()
    }
}

/// File-backed store writing one TOML file per key.
///
/// # Example
/// ```no_run
/// use vtrade_auth::auth::{FileKeyValueStore, KeyValueStore, SESSION_TOKEN_KEY};
///
/// let store = FileKeyValueStore::new_default();
/// store.set(SESSION_TOKEN_KEY, "9c1d0e")?;
/// assert_eq!(store.get(SESSION_TOKEN_KEY)?.as_deref(), Some("9c1d0e"));
/// # Ok::<(), vtrade_auth::auth::AuthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            base_dir: config.base_dir,
        }
    }

    pub fn new_default() -> Self {
        Self {
            base_dir: default_vtrade_dir(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.toml", normalize_key(key)))
    }

    fn ensure_parent(path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AuthError::Io(err.to_string())),
        };
        let entry: EntryFile = toml::from_str(&raw)?;
        Ok(Some(entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let path = self.entry_path(key);
        Self::ensure_parent(&path)?;
        let entry = EntryFile {
            version: 1,
            key: key.to_string(),
            value: value.to_string(),
            saved_at: Utc::now(),
        };
        let serialized = toml::to_string(&entry)?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        tracing::debug!(key, path = %path.display(), "stored value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AuthError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err.to_string())),
        }
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AuthError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

impl MemoryKeyValueStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AuthError> {
        self.values
            .lock()
            .map_err(|_| AuthError::Io("memory store lock poisoned".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryFile {
    version: u32,
    key: String,
    value: String,
    saved_at: DateTime<Utc>,
}

fn default_vtrade_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".vtrade"))
        .unwrap_or_else(|| PathBuf::from(".vtrade"))
}

fn normalize_key(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "default".to_string();
    }
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() || lower == '-' {
            out.push(lower);
        } else {
            out.push('-');
        }
    }
    if out.trim_matches('-').is_empty() {
        "default".to_string()
    } else {
        out
    }
}
