use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::cart::model::CartLineItem;
use business::domain::cart::storage::{CartStorage, CartStorageError, decode_lines, encode_lines};

/// Keeps a named cart slot as `<dir>/<slot>.json`.
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>, slot: &str) -> Self {
        Self {
            path: dir.into().join(format!("{}.json", slot)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_lines(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => {
                tracing::error!("Failed to read cart slot {}: {}", self.path.display(), e);
                Err(CartStorageError::Unavailable)
            }
        }
    }

    fn save(&self, lines: &[CartLineItem]) -> Result<(), CartStorageError> {
        let raw = encode_lines(lines)?;
        let tmp = self.path.with_extension("json.tmp");

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|_| CartStorageError::Unavailable)?;
        }

        // Readers only ever see the previous slot or the new one.
        fs::write(&tmp, raw)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                tracing::error!("Failed to write cart slot {}: {}", self.path.display(), e);
                CartStorageError::Unavailable
            })
    }
}
