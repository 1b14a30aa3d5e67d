//! Storage for raw introspection documents, keyed by
//! [`SchemaProvider::cache_key()`](crate::SchemaProvider::cache_key).

use indexmap::IndexMap;
use sha2::Digest;
use sha2::Sha256;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, CacheError>;

pub trait SchemaCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    fn put(&self, key: &str, raw_schema: &serde_json::Value) -> Result<()>;
}

/// Keeps documents in memory for as long as the cache lives. Share one
/// instance (e.g. behind an `Arc`) between clients to share its entries.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<IndexMap<String, serde_json::Value>>,
}
impl InMemoryCache {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn new() -> Self {
        Self::default()
    }
}
#[inherent::inherent]
impl SchemaCache for InMemoryCache {
    pub fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    pub fn put(&self, key: &str, raw_schema: &serde_json::Value) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), raw_schema.clone());
        Ok(())
    }
}

/// Persists each document as a JSON file inside a directory.
#[derive(Clone, Debug)]
pub struct DirectoryCache {
    directory: PathBuf,
}
impl DirectoryCache {
    pub fn directory(&self) -> &Path {
        self.directory.as_path()
    }

    /// The file a given key is stored in: the key with every character
    /// outside `[A-Za-z0-9-]` replaced by `_`, suffixed with the first 16 hex
    /// digits of the key's SHA-256 digest so that keys which sanitize alike
    /// still get distinct files.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        let digest = format!("{:x}", Sha256::digest(key.as_bytes()));
        self.directory.join(format!("{sanitized}-{}.json", &digest[..16]))
    }

    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}
#[inherent::inherent]
impl SchemaCache for DirectoryCache {
    pub fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.entry_path(key);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CacheError::Io {
                message: err.to_string(),
                path,
            }),
        };
        serde_json::from_str(json.as_str())
            .map(Some)
            .map_err(|err| CacheError::InvalidJson {
                message: err.to_string(),
                path,
            })
    }

    pub fn put(&self, key: &str, raw_schema: &serde_json::Value) -> Result<()> {
        let path = self.entry_path(key);
        std::fs::create_dir_all(&self.directory).map_err(|err| CacheError::Io {
            message: err.to_string(),
            path: self.directory.to_owned(),
        })?;
        let json = serde_json::to_string(raw_schema).map_err(|err| {
            CacheError::InvalidJson {
                message: err.to_string(),
                path: path.to_owned(),
            }
        })?;
        std::fs::write(&path, json).map_err(|err| CacheError::Io {
            message: err.to_string(),
            path,
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CacheError {
    #[error("Schema cache entry `{}` is not valid JSON: {message}", .path.display())]
    InvalidJson {
        message: String,
        path: PathBuf,
    },

    #[error("Schema cache I/O on `{}` failed: {message}", .path.display())]
    Io {
        message: String,
        path: PathBuf,
    },

    #[error("The in-memory schema cache lock was poisoned")]
    Poisoned,
}
