use serde::{Deserialize, Serialize};
use std::fmt;

/// Restaurant row as it appears in the entity relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub customer_rating: u8,
    pub distance: u32,
    pub price: u32,
    /// Foreign key into the cuisine relation. Rows without one never join.
    #[serde(default)]
    pub cuisine_id: Option<u32>,
}

/// Cuisine row as it appears in the category relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: u32,
    pub name: String,
}

/// One row of the merged, denormalized dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub cuisine: String,
    pub customer_rating: u8,
    /// Miles away
    pub distance: u32,
    /// Price per person
    pub price: u32,
}

/// Scored search hit, built per query and never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub name: String,
    pub rating: u8,
    pub distance: u32,
    pub price: u32,
    pub cuisine: String,
    pub score: f64,
}

impl ScoredResult {
    pub fn from_record(record: &RestaurantRecord, score: f64) -> Self {
        Self {
            name: record.name.clone(),
            rating: record.customer_rating,
            distance: record.distance,
            price: record.price,
            cuisine: record.cuisine.clone(),
            score,
        }
    }
}

/// Which similarity metric ranks the results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Token-set Levenshtein ratio, letter code `L`
    #[default]
    EditDistance,
    /// Jaro similarity, letter code `J`
    Jaro,
}

impl ScorerKind {
    /// Parse the single-letter engine code used on the command line and in
    /// the interactive prompt. Case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "L" => Some(ScorerKind::EditDistance),
            "J" => Some(ScorerKind::Jaro),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            ScorerKind::EditDistance => 'L',
            ScorerKind::Jaro => 'J',
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::EditDistance => write!(f, "Levenshtein"),
            ScorerKind::Jaro => write!(f, "Jaro-Winkler"),
        }
    }
}
