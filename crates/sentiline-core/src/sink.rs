//! Table output: line-delimited JSON and CSV

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::table::Table;

/// Write a table as JSONL, one compact object per row.
///
/// Field order follows column order; sparse cells are written as `null` so
/// every line carries the full column set.
pub fn write_jsonl(table: &Table, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in 0..table.num_rows() {
        let mut object = serde_json::Map::new();
        for (col, name) in table.columns().iter().enumerate() {
            object.insert(name.clone(), table.cell(row, col).to_json_value());
        }
        serde_json::to_writer(&mut writer, &Value::Object(object))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write a table as CSV: header row of column names, standard quoting.
///
/// An entirely empty table (no columns) produces an empty file rather than a
/// bare newline.
pub fn write_csv(table: &Table, path: &Path) -> io::Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(io::Error::other)?;
    if table.num_columns() == 0 {
        return writer.flush();
    }

    writer
        .write_record(table.columns())
        .map_err(io::Error::other)?;
    for row in 0..table.num_rows() {
        let fields: Vec<String> = (0..table.num_columns())
            .map(|col| table.cell(row, col).csv_field())
            .collect();
        writer.write_record(&fields).map_err(io::Error::other)?;
    }
    writer.flush()
}
