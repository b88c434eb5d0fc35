//! # Food Entry Data Model
//!
//! This module defines the record type shared by the authoritative JSON
//! store and the CSV import: one food/preparation entry with its purine
//! compound measurements.
//!
//! ## Core Concepts
//!
//! - **FoodEntry**: one food item, possibly qualified by a cut ("Kylling - Lår")
//! - **Purine fields**: the four nucleobases plus a separately sourced total
//! - **Uricogenic score**: the weighted risk score the consuming application
//!   derives from the nucleobase profile
//!
//! Field order on the struct matches the field order of the persisted
//! store, so serialization keeps existing documents stable.

use serde::{Deserialize, Serialize};

/// Reference serving size in grams for all ingested entries.
pub const DEFAULT_SERVING_G: u32 = 100;

/// A single food/preparation entry with purine content per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Display name, possibly composite ("Food - Cut")
    pub name: String,

    /// Cut/preparation descriptor, lowercase; "rå" when no cut was given
    pub preparation: String,

    /// Category label (free text in the store; see `categorizer`)
    pub category: String,

    /// Adenine, mg per 100 g
    #[serde(default)]
    pub adenine: f64,

    /// Guanine, mg per 100 g
    #[serde(default)]
    pub guanine: f64,

    /// Hypoxanthine, mg per 100 g
    #[serde(default)]
    pub hypoxanthine: f64,

    /// Xanthine, mg per 100 g
    #[serde(default)]
    pub xanthine: f64,

    /// Total purines, mg per 100 g. Parsed from its own source column;
    /// close to, but not enforced to equal, the sum of the four bases.
    #[serde(default)]
    pub total_purines: f64,

    /// Calculated uric acid equivalent, mg per 100 g
    #[serde(default)]
    pub uric_acid: f64,

    /// Reference serving size in grams
    #[serde(default = "default_serving")]
    pub serving: u32,
}

fn default_serving() -> u32 {
    DEFAULT_SERVING_G
}

impl FoodEntry {
    /// Weighted uricogenic score for this entry.
    ///
    /// Hypoxanthine converts to uric acid far more readily than the other
    /// bases, so it dominates the weighting:
    /// `1.0·H + 0.6·A + 0.1·G + 0.1·X`.
    pub fn weighted_uricogenic_score(&self) -> f64 {
        1.0 * self.hypoxanthine + 0.6 * self.adenine + 0.1 * self.guanine + 0.1 * self.xanthine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FoodEntry {
        FoodEntry {
            name: "Kylling - Lår".to_string(),
            preparation: "lår".to_string(),
            category: "Kylling - Kjøtt".to_string(),
            adenine: 10.0,
            guanine: 20.0,
            hypoxanthine: 50.0,
            xanthine: 5.0,
            total_purines: 85.0,
            uric_acid: 210.0,
            serving: DEFAULT_SERVING_G,
        }
    }

    #[test]
    fn test_weighted_uricogenic_score() {
        // 1.0*50 + 0.6*10 + 0.1*20 + 0.1*5 = 58.5
        assert!((entry().weighted_uricogenic_score() - 58.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let json = r#"{"name": "Torsk", "preparation": "rå", "category": "Annet"}"#;
        let parsed: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total_purines, 0.0);
        assert_eq!(parsed.adenine, 0.0);
        assert_eq!(parsed.serving, DEFAULT_SERVING_G);
    }

    #[test]
    fn test_serialization_round_trip_keeps_fields() {
        let json = serde_json::to_string(&entry()).unwrap();
        let back: FoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry());
        // name must come first so existing store formatting stays stable
        assert!(json.starts_with(r#"{"name""#));
    }
}
