//! # Purine Merge
//!
//! Reconciles two catalogs of food purine content: the authoritative
//! JSON store and a newly supplied Norwegian CSV source. One run loads
//! both, detects duplicates by fuzzy name and total-purine comparison,
//! categorizes genuinely new entries, then writes a backup of the old
//! store, the merged store, and a plain-text report.

pub mod categorizer;
pub mod csv_import;
pub mod dedup;
pub mod errors;
pub mod food_model;
pub mod merge;
pub mod report;
pub mod store;
pub mod text_processing;
