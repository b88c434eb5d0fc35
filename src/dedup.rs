//! # Duplicate Detection
//!
//! Decides whether a CSV candidate already exists in the authoritative
//! store, combining fuzzy name similarity with total-purine closeness.
//!
//! The thresholds (0.85 name-only, 0.6 name + 5% value) were tuned
//! against the similarity ratio in `text_processing` and are a fixed
//! contract, not defaults to adjust.

use crate::food_model::FoodEntry;
use crate::text_processing::similarity;
use log::debug;

/// A candidate matched against an existing store entry, kept for the
/// merge report only.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair {
    /// Name of the candidate as built from the CSV row
    pub csv_name: String,
    /// Name of the store entry it matched
    pub json_name: String,
    /// Candidate total purines, mg per 100 g
    pub csv_total: f64,
    /// Store entry total purines, mg per 100 g
    pub json_total: f64,
}

/// Find the first store entry the candidate duplicates, if any.
///
/// Scans `existing` in order and returns the first entry whose name
/// similarity exceeds 0.85, or whose similarity exceeds 0.6 while the
/// total-purine values lie within 5% of each other. Entries with a
/// zero stored total never match on value alone. The scan order is the
/// tie-break: the earliest qualifying entry wins, not the best one.
pub fn find_duplicate<'a>(
    candidate: &FoodEntry,
    existing: &'a [FoodEntry],
) -> Option<&'a FoodEntry> {
    for entry in existing {
        let name_sim = similarity(&candidate.name, &entry.name);

        let purine_diff = if entry.total_purines > 0.0 {
            (candidate.total_purines - entry.total_purines).abs() / entry.total_purines
        } else {
            1.0
        };

        if name_sim > 0.85 || (name_sim > 0.6 && purine_diff < 0.05) {
            debug!(
                "duplicate: '{}' matches '{}' (name_sim {:.3}, purine_diff {:.3})",
                candidate.name, entry.name, name_sim, purine_diff
            );
            return Some(entry);
        }
    }
    None
}
