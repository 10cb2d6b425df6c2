//! Record files shared by the journal and the quick-add store.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Read every record in file order. A missing file holds no records.
pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let lines = match serde_jsonlines::json_lines::<T, _>(path) {
        Ok(lines) => lines,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    lines
        .enumerate()
        .map(|(index, record)| {
            record.map_err(|source| {
                if source.kind() == ErrorKind::InvalidData {
                    StoreError::Corrupt {
                        path: path.to_path_buf(),
                        line: index + 1,
                        source,
                    }
                } else {
                    StoreError::io(path, source)
                }
            })
        })
        .collect()
}

pub(crate) fn append<T: Serialize>(path: &Path, record: &T) -> Result<(), StoreError> {
    ensure_parent(path)?;
    serde_jsonlines::append_json_lines(path, [record]).map_err(|e| StoreError::io(path, e))
}

/// Replace the file's contents with `records`.
pub(crate) fn rewrite<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    ensure_parent(path)?;
    // Write beside the target and rename so a failed write leaves the old file.
    let staging = path.with_extension("jsonl.tmp");
    serde_jsonlines::write_json_lines(&staging, records).map_err(|e| StoreError::io(&staging, e))?;
    std::fs::rename(&staging, path).map_err(|e| StoreError::io(path, e))
}

pub(crate) fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))
        }
        _ => Ok(()),
    }
}
