// ABOUTME: Extract command implementation - Full dump-to-rows run
// ABOUTME: Reads a dump, extracts each table concurrently, reports results

use crate::dump::{self, DumpData, TableData};
use crate::utils::{format_bytes, sanitize_identifier, validate_dump_path};
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;

/// Extract row data for the requested tables from a dump file
///
/// This command performs the full extraction run:
/// 1. Validates the dump path and reads the file into memory
/// 2. Extracts each requested table (up to 4 tables concurrently)
/// 3. Prints a per-table summary with row, column, and skipped counts
/// 4. Optionally writes the complete result to a JSON report file
///
/// The extraction itself is synchronous per table; concurrency comes from
/// fanning tables out over blocking worker tasks, which is safe because
/// every worker only reads the shared dump text.
///
/// A dump that yields no rows for any table ends with a warning, not an
/// error: zero rows found is a legitimate result as long as the file
/// itself was readable.
///
/// # Arguments
///
/// * `file` - Path to the SQL dump file
/// * `tables` - Tables to extract, in the order they should be reported
/// * `output` - Optional path for the JSON report
/// * `pretty` - Pretty-print the JSON report
///
/// # Errors
///
/// This function will return an error if:
/// - The dump file is missing, unreadable, or not valid UTF-8
/// - The report file cannot be written
pub async fn extract(
    file: &Path,
    tables: Vec<String>,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    if tables.is_empty() {
        tracing::warn!("⚠ No tables requested, nothing to do");
        return Ok(());
    }

    validate_dump_path(file)?;

    tracing::info!("Starting extraction from '{}'...", file.display());

    let size = std::fs::metadata(file)
        .map(|m| m.len())
        .unwrap_or_default();
    tracing::info!("Dump file size: {}", format_bytes(size));

    let dump: Arc<str> = Arc::from(dump::read_dump(file)?);
    tracing::info!("✓ Dump loaded into memory");
    tracing::info!("Extracting {} table(s) (concurrency: 4)", tables.len());
    tracing::info!("");

    // Create progress bar
    let progress = ProgressBar::new(tables.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let datasets: Vec<TableData> = stream::iter(tables.iter().cloned())
        .map(|table| {
            let dump = Arc::clone(&dump);
            let pb = progress.clone();
            async move {
                let data =
                    tokio::task::spawn_blocking(move || dump::extract_table(&dump, &table))
                        .await
                        .context("Extraction worker failed")?;
                pb.inc(1);
                pb.set_message(format!("Extracted {}", sanitize_identifier(&data.name)));
                Ok::<TableData, anyhow::Error>(data)
            }
        })
        .buffer_unordered(4) // Process up to 4 tables concurrently
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_>>()?;

    progress.finish_with_message("Extraction complete");
    tracing::info!("");

    let mut data = DumpData::default();
    for dataset in datasets {
        data.tables.insert(dataset.name.clone(), dataset);
    }

    // Display summary in the order the tables were requested
    tracing::info!("========================================");
    tracing::info!("Extraction Summary");
    tracing::info!("========================================");
    for table in &tables {
        let Some(dataset) = data.get(table) else {
            continue;
        };
        let label = sanitize_identifier(table);
        if dataset.is_empty() {
            tracing::warn!("  ⚠ {}: no rows found", label);
        } else {
            tracing::info!(
                "  ✓ {}: {} row(s), {} column(s)",
                label,
                dataset.row_count(),
                dataset.columns.len()
            );
        }
        if dataset.skipped_rows > 0 {
            tracing::warn!(
                "    ⚠ {} malformed row(s) skipped in '{}'",
                dataset.skipped_rows,
                label
            );
        }
    }
    tracing::info!("========================================");
    tracing::info!("Total rows: {}", data.total_rows());
    if data.total_skipped() > 0 {
        tracing::info!("Total skipped: {}", data.total_skipped());
    }
    tracing::info!("");

    if data.is_empty() {
        tracing::warn!("⚠ No data found in dump file!");
        tracing::warn!("  Make sure the file contains INSERT statements for:");
        for table in &tables {
            tracing::warn!("  - {}", sanitize_identifier(table));
        }
    } else {
        tracing::info!("✓ Extraction finished successfully");
    }

    if let Some(path) = output {
        write_report(&data, path, pretty)?;
    }

    Ok(())
}

/// Serialize the extraction result to a JSON report file.
fn write_report(data: &DumpData, path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    }
    .context("Failed to serialize extraction result")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to '{}'", path.display()))?;

    tracing::info!("✓ Report written to '{}'", path.display());
    Ok(())
}
