// ABOUTME: Inspect command implementation - Single table overview
// ABOUTME: Shows a table's column list and row counts without writing output

use crate::dump;
use crate::utils::{sanitize_identifier, validate_dump_path};
use anyhow::Result;
use std::path::Path;

/// Show the recovered column list and row count for one table
///
/// Reads the dump, extracts just the named table, and prints what was
/// found. Useful as a quick sanity check before a full extraction run.
///
/// A table with no CREATE TABLE block or no INSERT statements is reported
/// as a warning, not an error; only a failed file read fails the command.
pub async fn inspect(file: &Path, table: &str) -> Result<()> {
    validate_dump_path(file)?;

    let label = sanitize_identifier(table);
    tracing::info!("Inspecting table '{}' in '{}'...", label, file.display());

    let dump_text = dump::read_dump(file)?;
    let data = dump::extract_table(&dump_text, table);

    tracing::info!("");
    tracing::info!("========================================");
    tracing::info!("Table Report: {}", label);
    tracing::info!("========================================");

    if data.columns.is_empty() {
        tracing::warn!("⚠ No CREATE TABLE definition found");
    } else {
        tracing::info!("Columns ({}):", data.columns.len());
        for (idx, column) in data.columns.iter().enumerate() {
            tracing::info!("  {:>3}. {}", idx + 1, sanitize_identifier(column));
        }
    }

    tracing::info!("");
    if data.is_empty() {
        tracing::warn!("⚠ No rows found");
    } else {
        tracing::info!("Rows: {}", data.row_count());
    }
    if data.skipped_rows > 0 {
        tracing::warn!("⚠ Skipped {} malformed row(s)", data.skipped_rows);
    }
    tracing::info!("========================================");

    Ok(())
}
