//! Dynamic columnar table for schemaless JSONL records

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;
use serde_json::Value;

/// A single cell value.
///
/// Scalar variants cover everything a normalized table may contain; `Json`
/// holds composite values (objects/arrays) between load and
/// [`Table::normalize`], which stringifies any column containing one.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    Json(Value),
}

impl Cell {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Str(s),
            composite => Self::Json(composite),
        }
    }

    /// True for objects and arrays, the values CSV/dedup cannot hold as-is.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Str(s) => Value::String(s.clone()),
            Self::Json(v) => v.clone(),
        }
    }

    /// Textual form used when a column is stringified.
    ///
    /// Nulls are left alone; everything else becomes its compact JSON text
    /// (strings keep their content without quoting).
    fn stringified(&self) -> Cell {
        match self {
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Str(b.to_string()),
            Self::Number(n) => Self::Str(n.to_string()),
            Self::Str(s) => Self::Str(s.clone()),
            Self::Json(v) => Self::Str(v.to_string()),
        }
    }

    /// Field text for CSV output. Null becomes the empty field.
    pub fn csv_field(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Str(s) => s.clone(),
            Self::Json(v) => v.to_string(),
        }
    }
}

/// Ordered rows over a dynamic column set.
///
/// Columns appear in first-seen order across all pushed records. Rows may be
/// shorter than the column list when later records introduced new keys;
/// missing trailing cells read as [`Cell::Null`].
#[derive(Debug, Default, Clone)]
pub struct Table {
    columns: Vec<String>,
    index: FxHashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.columns.len();
        self.columns.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Cell at (row, column). Out-of-range coordinates read as null, the
    /// same as a missing trailing cell in a sparse row.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&Cell::Null)
    }

    /// Column values for `name`, one per row; `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let id = *self.index.get(name)?;
        Some((0..self.rows.len()).map(|r| self.cell(r, id)).collect())
    }

    /// Append one parsed JSON object as a row, extending the column set with
    /// any keys not seen before.
    pub fn push_object(&mut self, object: serde_json::Map<String, Value>) {
        let ids: Vec<usize> = object.keys().map(|k| self.column_id(k)).collect();
        let mut row = vec![Cell::Null; self.columns.len()];
        for (id, (_, value)) in ids.into_iter().zip(object) {
            row[id] = Cell::from_value(value);
        }
        self.rows.push(row);
    }

    /// Concatenate tables in order, unioning their column sets.
    pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
        let mut out = Table::new();
        for table in tables {
            let mapping: Vec<usize> = table
                .columns
                .iter()
                .map(|name| out.column_id(name))
                .collect();
            for row in &table.rows {
                let mut new_row = vec![Cell::Null; out.columns.len()];
                for (src, &dst) in mapping.iter().enumerate() {
                    new_row[dst] = row.get(src).cloned().unwrap_or(Cell::Null);
                }
                out.rows.push(new_row);
            }
        }
        out
    }

    /// Stringify every column that contains at least one composite value.
    ///
    /// Column-wide: scalars in an affected column are stringified too, so the
    /// column comes out uniformly textual. Returns the number of columns
    /// rewritten.
    pub fn normalize(&mut self) -> usize {
        let composite_cols: Vec<usize> = (0..self.columns.len())
            .filter(|&col| {
                (0..self.rows.len()).any(|row| self.cell(row, col).is_composite())
            })
            .collect();

        for &col in &composite_cols {
            for row in &mut self.rows {
                if let Some(cell) = row.get_mut(col) {
                    *cell = cell.stringified();
                }
            }
        }
        composite_cols.len()
    }

    /// Drop exact-duplicate rows, keeping the first occurrence and preserving
    /// the relative order of survivors. Returns the number of rows removed.
    ///
    /// Rows are keyed by their compact JSON encoding in column order, so call
    /// this after [`normalize`](Self::normalize) for well-defined equality.
    pub fn dedup(&mut self) -> usize {
        let before = self.rows.len();
        let width = self.columns.len();
        let mut seen = FxHashSet::default();
        self.rows.retain(|row| {
            let values: Vec<Value> = (0..width)
                .map(|col| row.get(col).unwrap_or(&Cell::Null).to_json_value())
                .collect();
            let key = Value::Array(values).to_string();
            seen.insert(key)
        });
        before - self.rows.len()
    }
}
