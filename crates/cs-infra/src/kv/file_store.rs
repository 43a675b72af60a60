use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cs_core::ports::{KeyValueStorePort, StorageError};
use tracing::debug;

/// File-backed key-value store: one `<key>.json` file per key.
///
/// 基于文件的键值存储，每个键对应一个文件。
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `<app_data_root>/store`, creating the directory.
    ///
    /// 在 `<app_data_root>/store` 下创建存储目录。
    pub fn new_in_app_data_root(app_data_root: &Path) -> Result<Self, io::Error> {
        let base_dir = app_data_root.join("store");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Construct with a concrete base directory. The directory is created on first write.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Other(format!("invalid store key: {key:?}")));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }

    fn map_io_error(context: &str, err: io::Error) -> StorageError {
        StorageError::Io(format!("{context}: {err}"))
    }
}

impl KeyValueStorePort for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error("failed to read store file", err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.base_dir)
            .map_err(|err| Self::map_io_error("failed to create store dir", err))?;

        // Readers see either the old or the new value, never a partial write.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .map_err(|err| Self::map_io_error("failed to write store temp file", err))?;
        fs::rename(&temp_path, &path)
            .map_err(|err| Self::map_io_error("failed to rename store file", err))?;

        debug!(key, bytes = value.len(), path = %path.display(), "store value written");
        Ok(())
    }
}
