use serde::{Deserialize, Serialize};
use crate::models::domain::{ScoredResult, ScorerKind};

/// Serializable view of one completed search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub engine: ScorerKind,
    /// Compiled filter expression, empty when unfiltered
    pub filter: String,
    pub total_candidates: usize,
    pub results: Vec<ScoredResult>,
}
