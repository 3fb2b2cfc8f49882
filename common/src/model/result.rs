//! Prioritized customer list returned by the model service.
//!
//! The table schema is taken from the keys of the first row. Later rows are
//! projected onto those columns: missing keys render blank and extra keys are
//! dropped. Key order is the server's order (`serde_json` is built with
//! `preserve_order`).

use serde_json::{Map, Value};

pub type ResultRow = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn render(rows: &[ResultRow]) -> Self {
        let columns: Vec<String> = rows
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| row.get(column).map(format_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text shown in a table cell for a scalar value.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The rows of the last successful build, kept so they can be exported
/// without building the model again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    rows: Option<Vec<ResultRow>>,
}

impl ResultCache {
    pub fn replace(&mut self, rows: Vec<ResultRow>) {
        self.rows = Some(rows);
    }

    pub fn rows(&self) -> Option<&[ResultRow]> {
        self.rows.as_deref()
    }

    /// JSON posted to the export endpoint, or `None` before the first build.
    pub fn export_payload(&self) -> Option<Result<String, serde_json::Error>> {
        self.rows.as_ref().map(serde_json::to_string)
    }
}
