// ABOUTME: Interactive terminal UI for table selection
// ABOUTME: Provides multi-select interface over the configured table set

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};

/// Interactively choose which tables to extract.
///
/// Presents a multi-select over `candidates` with every entry pre-selected,
/// then shows a summary and asks for confirmation.
///
/// Returns the selected table names, or an empty list when the user
/// deselects everything (the caller treats that as "nothing to do", not an
/// error). Declining the confirmation prompt cancels the run.
///
/// # Arguments
///
/// * `candidates` - Table names offered for selection
///
/// # Errors
///
/// Returns an error if the terminal interaction fails or the user declines
/// the confirmation prompt.
pub fn select_tables(candidates: &[String]) -> Result<Vec<String>> {
    println!("Select tables to extract:");
    println!("(Use arrow keys to navigate, Space to toggle, Enter to confirm)");
    println!();

    let defaults = vec![true; candidates.len()];
    let selections = MultiSelect::with_theme(&ColorfulTheme::default())
        .items(candidates)
        .defaults(&defaults)
        .interact()
        .context("Failed to get table selection")?;

    if selections.is_empty() {
        tracing::warn!("⚠ No tables selected");
        return Ok(Vec::new());
    }

    let selected: Vec<String> = selections
        .iter()
        .map(|&idx| candidates[idx].clone())
        .collect();

    println!();
    println!("Tables to extract: {}", selected.len());
    for table in &selected {
        println!("  ✓ {}", table);
    }
    println!();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Proceed with this selection?")
        .default(true)
        .interact()
        .context("Failed to get confirmation")?;

    if !confirmed {
        tracing::warn!("⚠ User cancelled operation");
        anyhow::bail!("Interactive selection cancelled by user");
    }

    Ok(selected)
}
