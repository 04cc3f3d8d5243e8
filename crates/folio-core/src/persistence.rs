use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::FolioError;

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceWrite {
    pub key: &'static str,
    pub value: String,
}

impl PreferenceWrite {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// String-valued key/value store for user preferences. Reads never fail;
/// writes may, and callers are expected to log and carry on.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError>;

    fn apply(&mut self, write: &PreferenceWrite) -> Result<(), FolioError> {
        self.set(write.key, write.value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStorage {
    values: BTreeMap<String, String>,
}

impl PreferenceStorage for MemoryPreferenceStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct FilePreferenceStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStorage {
    /// Opens the preference file, treating an unreadable or malformed file
    /// as empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match load_values(path.as_path()) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "preferences unreadable, using defaults");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self) -> Result<(), FolioError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| FolioError::io(parent, err))?;
        }
        let encoded = serde_json::to_vec_pretty(&self.values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        write_private(tmp_path.as_path(), &encoded)?;
        std::fs::rename(&tmp_path, &self.path).map_err(|err| FolioError::io(&self.path, err))
    }
}

impl PreferenceStorage for FilePreferenceStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>, FolioError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let bytes = std::fs::read(path).map_err(|err| FolioError::io(path, err))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(BTreeMap::new());
    }
    // Non-string values are dropped rather than rejecting the whole file.
    let raw = serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(&bytes)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}

fn write_private(path: &Path, bytes: &[u8]) -> Result<(), FolioError> {
    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path).map_err(|err| FolioError::io(path, err))?;
    file.write_all(bytes).map_err(|err| FolioError::io(path, err))?;
    file.flush().map_err(|err| FolioError::io(path, err))?;
    Ok(())
}
