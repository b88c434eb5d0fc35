//! # Food Categorizer
//!
//! Assigns a semantic category to a newly imported food based on keyword
//! heuristics over its Norwegian name and cut descriptor.
//!
//! Rule groups are evaluated in a fixed order and the first match wins;
//! reordering them silently changes classifications (e.g. "Oksepølse"
//! must hit the beef rule before the processed-meat rule ever sees it).
//! Matching is case-insensitive substring containment on the raw name,
//! not on a normalized form.

use std::fmt;

/// Vegetable names, matched anywhere in the food name.
const VEGETABLE_KEYWORDS: &[&str] = &[
    "asparges", "avokado", "bittermelon", "bambusskudd", "bønnespirer",
    "brokkoli", "kål", "gulrot", "blomkål", "tomat", "mais", "agurk",
    "aubergine", "hvitløk", "gressløk", "ingefær", "paprika", "okra",
    "purre", "gresskar", "komatsuna", "løk", "persille", "perilla",
    "potet", "spinat", "spirer", "søtpotet", "reddik", "squash", "kinakål",
];

/// Organ cuts that turn a beef entry into offal.
const BEEF_ORGANS: &[&str] = &["hjerte", "nyre", "lever", "tarm", "tunge", "kråse"];

/// Organ cuts that turn a chicken entry into offal.
const CHICKEN_ORGANS: &[&str] = &["hjerte", "lever", "kråse"];

/// Organ cuts that turn a pork entry into offal.
const PORK_ORGANS: &[&str] = &["hjerte", "nyre", "lever"];

/// Processed meat products.
const PROCESSED_KEYWORDS: &[&str] = &[
    "bacon", "skinke", "pølse", "postei", "corned beef", "salami", "prosciutto",
];

/// Semantic category of a food entry.
///
/// `Display` renders the Norwegian label stored in the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    /// Vegetables ("Grønnsaker")
    Vegetables,
    /// Beef offal ("Okse - Innmat")
    BeefOrgans,
    /// Beef muscle meat ("Okse - Kjøtt")
    BeefMeat,
    /// Chicken offal ("Kylling - Innmat")
    ChickenOrgans,
    /// Chicken muscle meat ("Kylling - Kjøtt")
    ChickenMeat,
    /// Pork offal ("Svin - Innmat")
    PorkOrgans,
    /// Pork muscle meat ("Svin - Kjøtt")
    PorkMeat,
    /// Lamb and mutton ("Lam")
    Lamb,
    /// Cured and processed meats ("Bearbeidet kjøtt")
    ProcessedMeat,
    /// Horse meat ("Hest")
    Horse,
    /// Whale meat ("Hval")
    Whale,
    /// Universal fallback ("Annet")
    Other,
}

impl FoodCategory {
    /// The label string used in the persisted store.
    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Vegetables => "Grønnsaker",
            FoodCategory::BeefOrgans => "Okse - Innmat",
            FoodCategory::BeefMeat => "Okse - Kjøtt",
            FoodCategory::ChickenOrgans => "Kylling - Innmat",
            FoodCategory::ChickenMeat => "Kylling - Kjøtt",
            FoodCategory::PorkOrgans => "Svin - Innmat",
            FoodCategory::PorkMeat => "Svin - Kjøtt",
            FoodCategory::Lamb => "Lam",
            FoodCategory::ProcessedMeat => "Bearbeidet kjøtt",
            FoodCategory::Horse => "Hest",
            FoodCategory::Whale => "Hval",
            FoodCategory::Other => "Annet",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Categorize a food by its raw name and cut descriptor.
///
/// Total over all inputs; anything no rule recognizes falls back to
/// [`FoodCategory::Other`].
///
/// # Examples
///
/// ```rust
/// use purine_merge::categorizer::{categorize_food, FoodCategory};
///
/// assert_eq!(categorize_food("Asparges", ""), FoodCategory::Vegetables);
/// assert_eq!(categorize_food("Storfe", "Hjerte"), FoodCategory::BeefOrgans);
/// ```
pub fn categorize_food(raw_name: &str, cut: &str) -> FoodCategory {
    let name = raw_name.to_lowercase();
    let cut = cut.to_lowercase();

    if contains_any(&name, VEGETABLE_KEYWORDS) {
        return FoodCategory::Vegetables;
    }

    if name.contains("storfe") || name.contains("okse") {
        return if contains_any(&cut, BEEF_ORGANS) {
            FoodCategory::BeefOrgans
        } else {
            FoodCategory::BeefMeat
        };
    }

    if name.contains("kylling") {
        return if contains_any(&cut, CHICKEN_ORGANS) {
            FoodCategory::ChickenOrgans
        } else {
            FoodCategory::ChickenMeat
        };
    }

    if name.contains("svine") || name.contains("svin") {
        return if contains_any(&cut, PORK_ORGANS) {
            FoodCategory::PorkOrgans
        } else {
            FoodCategory::PorkMeat
        };
    }

    if name.contains("fåre") || name.contains("lam") {
        return FoodCategory::Lamb;
    }

    if contains_any(&name, PROCESSED_KEYWORDS) {
        return FoodCategory::ProcessedMeat;
    }

    if name.contains("hest") {
        return FoodCategory::Horse;
    }

    if name.contains("hval") {
        return FoodCategory::Whale;
    }

    FoodCategory::Other
}
