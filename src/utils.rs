// ABOUTME: Utility functions for validation and display formatting
// ABOUTME: Provides dump path checks and log-safe identifier handling

use anyhow::{bail, Result};
use std::path::Path;

/// Validate a dump file path before any read is attempted
///
/// Checks that the path is non-empty, exists, and points at a regular
/// file, so the user gets an actionable message instead of a bare I/O
/// error.
///
/// # Arguments
///
/// * `path` - Dump file path to validate
///
/// # Returns
///
/// Returns `Ok(())` if the path looks usable.
///
/// # Errors
///
/// Returns an error with a helpful message if the path is:
/// - Empty
/// - Nonexistent
/// - A directory or other non-file
///
/// # Examples
///
/// ```
/// # use mysql_dump_extractor::utils::validate_dump_path;
/// # use std::path::Path;
/// assert!(validate_dump_path(Path::new("")).is_err());
/// assert!(validate_dump_path(Path::new("/no/such/dump.sql")).is_err());
/// ```
pub fn validate_dump_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("Dump file path cannot be empty");
    }

    if !path.exists() {
        bail!(
            "Dump file not found: {}\n\
             Check the path and try again.",
            path.display()
        );
    }

    if !path.is_file() {
        bail!(
            "'{}' is not a regular file.\n\
             Pass the path of an exported .sql dump file.",
            path.display()
        );
    }

    Ok(())
}

/// Sanitize an identifier (table name, column name, etc.) for display
///
/// Removes control characters and limits length to prevent log injection
/// attacks and ensure readable error messages.
///
/// **Note**: This is for display purposes only; the extraction engine
/// treats names as opaque lookup keys.
///
/// # Examples
///
/// ```
/// # use mysql_dump_extractor::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("normal_table"), "normal_table");
/// assert_eq!(sanitize_identifier("table\x00name"), "tablename");
/// assert_eq!(sanitize_identifier("table\nname"), "tablename");
///
/// // Length limit
/// let long_name = "a".repeat(200);
/// assert_eq!(sanitize_identifier(&long_name).len(), 100);
/// ```
pub fn sanitize_identifier(identifier: &str) -> String {
    // Remove any control characters and limit length for display
    identifier
        .chars()
        .filter(|c| !c.is_control())
        .take(100)
        .collect()
}

/// Format a byte count into a human-readable size string
///
/// # Examples
///
/// ```
/// # use mysql_dump_extractor::utils::format_bytes;
/// assert_eq!(format_bytes(1024), "1.0 KB");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(1073741824), "1.0 GB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.1} {}", size, UNITS[unit_idx])
}
