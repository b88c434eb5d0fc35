//! # Merge Report Formatting
//!
//! Renders the human-readable report for one merge run: summary counts,
//! the duplicate pairings, and the new entries grouped by category.

use std::collections::BTreeMap;

use crate::dedup::DuplicatePair;
use crate::food_model::FoodEntry;

const BANNER_WIDTH: usize = 70;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Format the plain-text merge report.
///
/// Categories are sorted alphabetically and entries within a category by
/// name; duplicates appear in detection order.
pub fn format_report(
    csv_processed: usize,
    duplicates: &[DuplicatePair],
    new_entries: &[FoodEntry],
    merged_total: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(banner());
    lines.push("MERGE REPORT".to_string());
    lines.push(banner());
    lines.push(String::new());
    lines.push(format!("CSV entries processed:    {csv_processed}"));
    lines.push(format!("Duplicates found:         {}", duplicates.len()));
    lines.push(format!("New entries added:        {}", new_entries.len()));
    lines.push(format!("Total entries in JSON:    {merged_total}"));
    lines.push(String::new());

    lines.push(banner());
    lines.push("DUPLICATES (kept existing JSON data):".to_string());
    lines.push(banner());
    for dup in duplicates {
        lines.push(format!("  CSV: {} (total: {:.1})", dup.csv_name, dup.csv_total));
        lines.push(format!("  ≈ JSON: {} (total: {:.1})", dup.json_name, dup.json_total));
        lines.push(String::new());
    }

    lines.push(banner());
    lines.push("NEW ENTRIES ADDED:".to_string());
    lines.push(banner());

    // BTreeMap keeps the category sections alphabetical
    let mut by_category: BTreeMap<&str, Vec<&FoodEntry>> = BTreeMap::new();
    for entry in new_entries {
        by_category.entry(&entry.category).or_default().push(entry);
    }

    for (category, mut entries) in by_category {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        lines.push(format!("\n{category}:"));
        for entry in entries {
            lines.push(format!(
                "  - {} (total: {:.1} mg/100g)",
                entry.name, entry.total_purines
            ));
        }
    }

    lines.join("\n")
}
