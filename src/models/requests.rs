use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::ScorerKind;

/// A single search as typed by the user:
/// `query[,distance][,rating][,price][,cuisine]`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub input: String,
    #[serde(default)]
    pub engine: ScorerKind,
}

impl SearchRequest {
    pub fn new(input: impl Into<String>, engine: ScorerKind) -> Self {
        Self {
            input: input.into(),
            engine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let req = SearchRequest::new("", ScorerKind::Jaro);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_query_accepted() {
        let req = SearchRequest::new("pizza,5", ScorerKind::EditDistance);
        assert!(req.validate().is_ok());
    }
}
