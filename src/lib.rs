//! Restaurant Search - local fuzzy search over a restaurant catalog
//!
//! This library merges a restaurant relation with its cuisines, compiles
//! comma-separated filters into a predicate, and ranks the surviving
//! restaurants by name similarity with one of two pluggable scorers.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{compile_filter, merge_dataset, score_edit_distance, score_jaro, SearchEngine};
pub use models::{Restaurant, Cuisine, RestaurantRecord, ScoredResult, ScorerKind, SearchRequest, SearchResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let compiled = compile_filter("pizza,5").unwrap();
        assert_eq!(compiled.distance, 5);
    }
}
