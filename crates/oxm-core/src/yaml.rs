use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::DocumentError;
use crate::tree::normalize_keys;

/// Load an API description from disk. The first non-whitespace byte decides
/// the codec: `{` means JSON, anything else YAML. The top-level node must be
/// a mapping; scalar keys are normalized to strings before returning.
pub fn load_document(path: &Path) -> Result<Mapping, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value = match text.as_bytes().iter().copied().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => {
            let json: serde_json::Value =
                serde_json::from_str(&text).map_err(|source| DocumentError::ParseJson {
                    path: path.to_path_buf(),
                    source,
                })?;
            serde_yaml::to_value(&json).map_err(|source| DocumentError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => serde_yaml::from_str(&text).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
    };
    normalize_keys(&mut value);
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(DocumentError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

pub fn document_to_string(doc: &Mapping) -> Result<String, DocumentError> {
    serde_yaml::to_string(doc).map_err(DocumentError::Serialize)
}

/// Serialize `doc` as YAML and write it to `path`. Mapping key order is
/// preserved from the in-memory representation.
pub fn save_document(path: &Path, doc: &Mapping) -> Result<(), DocumentError> {
    let text = document_to_string(doc)?;
    fs::write(path, text).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Timestamped copy of `path` next to it, taken before an in-place
/// overwrite (non-destructive).
pub fn backup_file(path: &Path) -> Result<PathBuf, DocumentError> {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("document");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dest = path
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!("{}.{}.bak", name, ts));
    fs::copy(path, &dest).map_err(|source| DocumentError::Write {
        path: dest.clone(),
        source,
    })?;
    Ok(dest)
}
