//! # Text Processing Module
//!
//! Name normalization and fuzzy similarity scoring used by duplicate
//! detection.
//!
//! ## Features
//!
//! - Normalizes Norwegian food names down to bare letters for comparison
//! - Matching-blocks similarity ratio (2·M / T) over normalized names
//!
//! The similarity ratio is the calibration basis for the duplicate
//! detector's thresholds; swapping it for a different metric (plain
//! Levenshtein, Jaro-Winkler, ...) would require re-tuning those.

use lazy_static::lazy_static;
use regex::Regex;

// Everything outside the lowercase Norwegian alphabet gets stripped
// before comparison: digits, punctuation, whitespace, cut separators.
lazy_static! {
    static ref NON_ALPHABETIC: Regex =
        Regex::new(r"[^a-zæøå]").expect("Normalizer pattern should be valid");
}

/// Normalize a display name for comparison.
///
/// Lowercases the input and removes every character that is not a
/// lowercase Latin letter or one of `æ`, `ø`, `å`. The result is only
/// used as similarity input and is never stored.
///
/// # Examples
///
/// ```rust
/// use purine_merge::text_processing::normalize_name;
///
/// assert_eq!(normalize_name("Kylling - Lår"), "kyllinglår");
/// assert_eq!(normalize_name("Corned beef (boks)"), "cornedbeefboks");
/// ```
pub fn normalize_name(name: &str) -> String {
    NON_ALPHABETIC.replace_all(&name.to_lowercase(), "").into_owned()
}

/// Similarity ratio between two names, in `[0.0, 1.0]`.
///
/// Both names are normalized first, then scored as
/// `2.0 * matches / (len_a + len_b)` where `matches` is the number of
/// characters in the longest common subsequence. 1.0 means the
/// normalized forms are identical; two empty strings also score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_norm = normalize_name(a);
    let b_norm = normalize_name(b);

    if a_norm.is_empty() && b_norm.is_empty() {
        return 1.0;
    }
    if a_norm.is_empty() || b_norm.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a_norm.chars().collect();
    let b_chars: Vec<char> = b_norm.chars().collect();
    let matches = lcs_length(&a_chars, &b_chars);
    2.0 * matches as f64 / (a_chars.len() + b_chars.len()) as f64
}

/// LCS length using two-row DP (space-optimised).
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }
    prev[n]
}
