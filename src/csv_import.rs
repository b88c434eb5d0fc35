//! # CSV Import
//!
//! Parses the tabular purine source into candidate [`FoodEntry`] records.
//!
//! ## Features
//!
//! - Header-name column binding (column order in the file is irrelevant)
//! - Tolerant numeric cells: decimal comma, "ND" markers, and garbage all
//!   resolve to a number instead of aborting the batch
//! - Composite display names (`"{food} - {cut}"`) and category assignment
//!   at parse time

use std::io::Read;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::categorizer::categorize_food;
use crate::errors::MergeError;
use crate::food_model::{FoodEntry, DEFAULT_SERVING_G};

/// One row of the source file, all cells as raw text.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Matvarer")]
    food: String,
    #[serde(rename = "Del")]
    cut: String,
    #[serde(rename = "Adenin")]
    adenine: String,
    #[serde(rename = "Guanin")]
    guanine: String,
    #[serde(rename = "Hypoxantin")]
    hypoxanthine: String,
    #[serde(rename = "Xantin")]
    xanthine: String,
    #[serde(rename = "Total")]
    total: String,
    #[serde(rename = "Beregnet som urinsyre")]
    uric_acid: String,
}

/// Parse a numeric cell, absorbing data-quality problems as 0.0.
///
/// Empty/whitespace-only cells and the "ND" (not detected) marker are
/// 0.0 by definition. Other values are parsed after substituting the
/// decimal comma; anything unparseable is also 0.0. This fallback is a
/// fixed contract — downstream duplicate detection depends on it.
pub fn parse_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nd") {
        return 0.0;
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("unparseable numeric cell '{trimmed}', substituting 0.0");
            0.0
        }
    }
}

fn row_to_entry(row: RawRow) -> FoodEntry {
    let food = row.food.trim();
    let cut = row.cut.trim();

    let (name, preparation) = if cut.is_empty() {
        (food.to_string(), "rå".to_string())
    } else {
        (format!("{food} - {cut}"), cut.to_lowercase())
    };

    FoodEntry {
        name,
        preparation,
        category: categorize_food(food, cut).label().to_string(),
        adenine: parse_value(&row.adenine),
        guanine: parse_value(&row.guanine),
        hypoxanthine: parse_value(&row.hypoxanthine),
        xanthine: parse_value(&row.xanthine),
        total_purines: parse_value(&row.total),
        uric_acid: parse_value(&row.uric_acid),
        serving: DEFAULT_SERVING_G,
    }
}

/// Read candidate entries from any CSV reader, in file order.
///
/// Structural problems (missing columns, ragged rows) are fatal; cell
/// contents never are.
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<FoodEntry>, MergeError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut candidates = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|e| MergeError::Load(format!("CSV row {}: {e}", idx + 2)))?;
        candidates.push(row_to_entry(row));
    }
    Ok(candidates)
}

/// Read candidate entries from the source file at `path`.
pub fn read_candidates_from_path(path: &Path) -> Result<Vec<FoodEntry>, MergeError> {
    let file = std::fs::File::open(path)
        .map_err(|e| MergeError::Load(format!("cannot open CSV source {}: {e}", path.display())))?;
    read_candidates(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Matvarer,Del,Adenin,Guanin,Hypoxantin,Xantin,Total,Beregnet som urinsyre";

    #[test]
    fn test_parse_value_markers_and_blanks() {
        assert_eq!(parse_value("ND"), 0.0);
        assert_eq!(parse_value("nd"), 0.0);
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("  "), 0.0);
    }

    #[test]
    fn test_parse_value_decimal_comma() {
        assert_eq!(parse_value("12,5"), 12.5);
        assert_eq!(parse_value("3.14"), 3.14);
        assert_eq!(parse_value(" 7 "), 7.0);
    }

    #[test]
    fn test_parse_value_garbage_is_zero() {
        assert_eq!(parse_value("abc"), 0.0);
        assert_eq!(parse_value("12,5,0"), 0.0);
    }

    #[test]
    fn test_row_with_cut_builds_composite_name() {
        let csv = format!("{HEADER}\nKylling,Lår,10,20,50,5,85,210");
        let entries = read_candidates(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.name, "Kylling - Lår");
        assert_eq!(e.preparation, "lår");
        assert_eq!(e.category, "Kylling - Kjøtt");
        assert_eq!(e.total_purines, 85.0);
        assert_eq!(e.serving, DEFAULT_SERVING_G);
    }

    #[test]
    fn test_row_without_cut_defaults_to_raw() {
        let csv = format!("{HEADER}\nAsparges,,5,10,2,1,18,43");
        let entries = read_candidates(csv.as_bytes()).unwrap();
        let e = &entries[0];
        assert_eq!(e.name, "Asparges");
        assert_eq!(e.preparation, "rå");
        assert_eq!(e.category, "Grønnsaker");
    }

    #[test]
    fn test_nd_and_comma_cells_in_rows() {
        let csv = format!("{HEADER}\nStorfe,Lever,\"12,5\",ND,30,,\"42,5\",101");
        let entries = read_candidates(csv.as_bytes()).unwrap();
        let e = &entries[0];
        assert_eq!(e.adenine, 12.5);
        assert_eq!(e.guanine, 0.0);
        assert_eq!(e.xanthine, 0.0);
        assert_eq!(e.total_purines, 42.5);
        assert_eq!(e.category, "Okse - Innmat");
    }

    #[test]
    fn test_rows_keep_file_order() {
        let csv = format!("{HEADER}\nHvalbiff,,1,1,1,1,4,10\nAsparges,,2,2,2,2,8,20");
        let entries = read_candidates(csv.as_bytes()).unwrap();
        assert_eq!(entries[0].name, "Hvalbiff");
        assert_eq!(entries[1].name, "Asparges");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "Matvarer,Del\nKylling,Lår";
        assert!(read_candidates(csv.as_bytes()).is_err());
    }
}
