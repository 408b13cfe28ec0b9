//! Line-delimited JSON input

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::table::Table;

/// Parse a JSONL file into a [`Table`].
///
/// One JSON object per line; blank lines are skipped. The first invalid line
/// aborts the load with a [`LoadError`] naming the file and line number —
/// there is no per-line recovery.
pub fn read_jsonl(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table = Table::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value =
            serde_json::from_str(&line).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                line: number + 1,
                source,
            })?;
        match value {
            Value::Object(object) => table.push_object(object),
            _ => {
                return Err(LoadError::NotObject {
                    path: path.to_path_buf(),
                    line: number + 1,
                })
            }
        }
    }

    log::debug!("{}: {} rows", path.display(), table.num_rows());
    Ok(table)
}
