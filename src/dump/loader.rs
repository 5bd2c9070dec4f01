// ABOUTME: Dump file loading and whole-run extraction
// ABOUTME: Reads the dump into memory and materializes each requested table

use crate::dump::table::{extract_table, TableData};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The result of one extraction run: one dataset per requested table.
///
/// Every requested table gets an entry, even when the dump has no trace of
/// it; that entry is simply an empty dataset. Absence of data is not an
/// error here, only a failed file read is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DumpData {
    pub tables: HashMap<String, TableData>,
}

impl DumpData {
    pub fn get(&self, table: &str) -> Option<&TableData> {
        self.tables.get(table)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.values().map(|t| t.row_count()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.tables.values().map(|t| t.skipped_rows).sum()
    }

    /// True when no requested table produced any rows.
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.is_empty())
    }
}

/// Read a dump file into memory as UTF-8 text.
///
/// This is the engine's only filesystem touch. A missing, unreadable, or
/// non-UTF-8 file is a hard error carrying the underlying cause.
pub fn read_dump(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read dump file '{}'", path.display()))
}

/// Materialize every requested table from already-loaded dump text.
pub fn extract_tables(dump: &str, tables: &[String]) -> DumpData {
    let mut data = DumpData::default();
    for table in tables {
        data.tables
            .insert(table.clone(), extract_table(dump, table));
    }
    data
}

/// Load a dump file and extract every requested table from it.
///
/// Fails only when the file cannot be read or decoded; in that case no
/// table is extracted at all. Tables absent from the dump come back as
/// empty datasets.
pub fn extract_from_file(path: &Path, tables: &[String]) -> Result<DumpData> {
    let dump = read_dump(path)?;
    Ok(extract_tables(&dump, tables))
}
