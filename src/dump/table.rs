// ABOUTME: Per-table row assembly from schema and insert scans
// ABOUTME: Zips normalized values to columns and drops malformed rows

use crate::dump::{insert, schema, values};
use crate::dump::values::Value;
use serde::Serialize;
use std::collections::HashMap;

/// One reconstructed row: column name to value.
pub type Record = HashMap<String, Value>;

/// Everything recovered for a single table.
///
/// `columns` keeps declaration order, which is also the positional order
/// the values were zipped in. `skipped_rows` counts tuples whose value
/// count did not match the column count; those are dropped without error.
#[derive(Debug, Clone, Serialize)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    pub skipped_rows: usize,
}

impl TableData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reconstruct all rows of `table` from the dump text.
///
/// Columns come from the table's CREATE TABLE block, tuples from every
/// matching INSERT statement, in encounter order. A tuple with the wrong
/// number of values is counted in `skipped_rows` and dropped; an unknown
/// table produces an empty dataset, not an error.
pub fn extract_table(dump: &str, table: &str) -> TableData {
    let columns = schema::table_columns(dump, table);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for tuple_list in insert::insert_value_lists(dump, table) {
        for raw_row in values::parse_value_rows(tuple_list) {
            if raw_row.len() != columns.len() {
                tracing::debug!(
                    "Skipping row for '{}': expected {} values, got {}",
                    table,
                    columns.len(),
                    raw_row.len()
                );
                skipped += 1;
                continue;
            }

            let record: Record = columns
                .iter()
                .cloned()
                .zip(raw_row.iter().map(|raw| values::clean_value(raw)))
                .collect();
            rows.push(record);
        }
    }

    TableData {
        name: table.to_string(),
        columns,
        rows,
        skipped_rows: skipped,
    }
}
