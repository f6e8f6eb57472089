// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod merge;
pub mod scoring;
pub mod similarity;

pub use engine::{SearchEngine, SearchOutcome};
pub use filters::{compile_filter, query_text, Clause, CompiledFilter, FilterCompiler, FilterError, Predicate};
pub use merge::merge_dataset;
pub use scoring::{rank, score_edit_distance, score_jaro, scorer_for, EditDistanceScorer, JaroScorer, Scorer};
