//! # Merge Orchestrator
//!
//! Sequences one full reconciliation run: load the authoritative store,
//! parse the CSV candidates, partition them into duplicates and new
//! entries, then persist backup, merged store, and report — in that
//! order, so a recovery copy exists before the store is overwritten.

use std::path::PathBuf;

use log::info;

use crate::csv_import::read_candidates_from_path;
use crate::dedup::{find_duplicate, DuplicatePair};
use crate::errors::MergeError;
use crate::food_model::FoodEntry;
use crate::report::format_report;
use crate::store::{backup_store, load_store, save_store, write_report};

/// The authoritative JSON store.
pub const STORE_FILE: &str = "purine_data.json";
/// The tabular source to merge in.
pub const CSV_FILE: &str = "purines_no.csv";
/// Byte-identical copy of the pre-merge store.
pub const BACKUP_FILE: &str = "purine_data.json.backup";
/// Human-readable merge report.
pub const REPORT_FILE: &str = "merge_report.txt";

/// File locations for one merge run.
///
/// The defaults are the tool's fixed naming conventions; parameterized
/// paths exist so tests can run against a sandbox directory.
#[derive(Debug, Clone)]
pub struct MergePaths {
    /// Authoritative store, read and then overwritten
    pub store: PathBuf,
    /// CSV source of candidate entries
    pub csv_source: PathBuf,
    /// Backup destination for the pre-merge store
    pub backup: PathBuf,
    /// Report destination
    pub report: PathBuf,
}

impl Default for MergePaths {
    fn default() -> Self {
        Self {
            store: PathBuf::from(STORE_FILE),
            csv_source: PathBuf::from(CSV_FILE),
            backup: PathBuf::from(BACKUP_FILE),
            report: PathBuf::from(REPORT_FILE),
        }
    }
}

/// Counts and pairings produced by a completed run.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Entries in the store before the merge
    pub existing_count: usize,
    /// Candidate rows read from the CSV source
    pub candidates_count: usize,
    /// Candidates that matched an existing entry
    pub duplicates: Vec<DuplicatePair>,
    /// Candidates appended to the store
    pub new_count: usize,
    /// Entries in the store after the merge
    pub merged_count: usize,
}

const CONSOLE_BANNER_WIDTH: usize = 70;

fn console_banner() -> String {
    "=".repeat(CONSOLE_BANNER_WIDTH)
}

fn console_header(paths: &MergePaths) -> String {
    let bar = console_banner();
    format!(
        "{bar}\nMERGING {} INTO {}\n{bar}",
        paths.csv_source.display(),
        paths.store.display()
    )
}

fn console_completion() -> String {
    let bar = console_banner();
    format!("\n{bar}\nMERGE COMPLETE!\n{bar}")
}

/// Partition candidates into duplicate pairings and genuinely new entries.
///
/// Every candidate is checked against the pre-merge store only; the
/// store baseline is never extended mid-run, and candidates are never
/// compared against each other.
pub fn classify_candidates(
    candidates: Vec<FoodEntry>,
    existing: &[FoodEntry],
) -> (Vec<DuplicatePair>, Vec<FoodEntry>) {
    let mut duplicates = Vec::new();
    let mut new_entries = Vec::new();

    for candidate in candidates {
        match find_duplicate(&candidate, existing) {
            Some(matched) => duplicates.push(DuplicatePair {
                csv_name: candidate.name,
                json_name: matched.name.clone(),
                csv_total: candidate.total_purines,
                json_total: matched.total_purines,
            }),
            None => new_entries.push(candidate),
        }
    }

    (duplicates, new_entries)
}

/// Run one merge against the given paths.
pub fn run_merge(paths: &MergePaths) -> Result<MergeOutcome, MergeError> {
    println!("\n[1/5] Loading existing JSON data...");
    let existing = load_store(&paths.store)?;
    println!("   OK Loaded {} existing entries", existing.len());

    println!("\n[2/5] Reading CSV file...");
    let candidates = read_candidates_from_path(&paths.csv_source)?;
    println!("   OK Read {} CSV entries", candidates.len());

    println!("\n[3/5] Detecting duplicates...");
    let candidates_count = candidates.len();
    let (duplicates, new_entries) = classify_candidates(candidates, &existing);
    println!(
        "   OK Found {} duplicates (will keep existing JSON data)",
        duplicates.len()
    );
    println!("   OK Found {} new entries (will add to JSON)", new_entries.len());

    println!("\n[4/5] Merging data...");
    let existing_count = existing.len();
    let new_count = new_entries.len();
    let mut merged = existing;
    merged.extend(new_entries.iter().cloned());
    println!(
        "   OK Merged data: {existing_count} existing + {new_count} new = {} total",
        merged.len()
    );

    println!("\n[5/5] Saving results...");
    // Backup must exist on disk before the store is replaced
    backup_store(&paths.store, &paths.backup)?;
    println!("   OK Backed up original to {}", paths.backup.display());

    save_store(&paths.store, &merged)?;
    println!("   OK Saved merged data to {}", paths.store.display());

    let report = format_report(candidates_count, &duplicates, &new_entries, merged.len());
    write_report(&paths.report, &report)?;
    println!("   OK Saved report to {}", paths.report.display());

    info!(
        "merge complete: {existing_count} existing, {new_count} new, {} duplicates",
        duplicates.len()
    );

    Ok(MergeOutcome {
        existing_count,
        candidates_count,
        duplicates,
        new_count,
        merged_count: merged.len(),
    })
}

/// Run one merge against the fixed file conventions in the current
/// directory, printing a closing summary.
pub fn run() -> Result<MergeOutcome, MergeError> {
    let paths = MergePaths::default();
    println!("{}", console_header(&paths));

    let outcome = run_merge(&paths)?;

    println!("{}", console_completion());
    println!("\nSummary:");
    println!("  - Original entries: {}", outcome.existing_count);
    println!("  - New entries added: {}", outcome.new_count);
    println!("  - Duplicates skipped: {}", outcome.duplicates.len());
    println!("  - Total entries: {}", outcome.merged_count);
    println!("\nFiles created:");
    println!("  - {} (merged data)", paths.store.display());
    println!("  - {} (original backup)", paths.backup.display());
    println!("  - {} (detailed report)", paths.report.display());

    Ok(outcome)
}
