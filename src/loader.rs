// Loads a category's records from a JSON file under the data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::record::Record;

/// Why a source file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads source files relative to a fixed directory (`json/` by default).
#[derive(Debug, Clone)]
pub struct Loader {
    dir: PathBuf,
}

impl Loader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Loader { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read `<dir>/<file>` and parse it as a list of records. The whole file
    /// is rejected if any entry is malformed.
    pub fn load(&self, file: &str) -> Result<Vec<Record>, LoadError> {
        let path = self.dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::FileNotFound { path: path.clone() }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("supplements.json"),
            r#"[{"name":"Vitamin C","price":3},{"name":"Zinc"}]"#,
        )
        .unwrap();

        let records = Loader::new(dir.path()).load("supplements.json").unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Vitamin C", "Zinc"]);
        assert_eq!(records[0].extra["price"], 3);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = Loader::new(dir.path()).load("nope.json").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "[{\"name\": ").unwrap();
        let err = Loader::new(dir.path()).load("bad.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn record_without_name_rejects_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("otc.json"), r#"[{"name":"A"},{"price":2}]"#).unwrap();
        let err = Loader::new(dir.path()).load("otc.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
