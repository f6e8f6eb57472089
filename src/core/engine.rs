use std::sync::Arc;

use crate::config::SearchSettings;
use crate::core::{
    filters::{query_text, CompiledFilter, FilterCompiler, FilterError},
    scoring::{rank, scorer_for},
};
use crate::models::{RestaurantRecord, ScoredResult, SearchRequest, SearchResponse};

/// Result of one search
#[derive(Debug)]
pub struct SearchOutcome {
    /// Free-text part of the request that was scored
    pub query: String,
    /// Filter that was actually applied; empty when compilation failed
    pub filter: CompiledFilter,
    /// Set when the filters could not be compiled and the search fell back
    /// to the whole catalog
    pub filter_error: Option<FilterError>,
    /// Number of records left after filtering
    pub total_candidates: usize,
    pub results: Vec<ScoredResult>,
}

impl SearchOutcome {
    pub fn into_response(self, request: &SearchRequest) -> SearchResponse {
        SearchResponse {
            query: self.query,
            engine: request.engine,
            filter: self.filter.expression(),
            total_candidates: self.total_candidates,
            results: self.results,
        }
    }
}

/// Search orchestrator - filter, score, rank
///
/// # Pipeline Stages
/// 1. Compile the comma-separated filters
/// 2. Restrict the catalog with the compiled predicate
/// 3. Score the remaining candidates with the requested scorer
/// 4. Drop candidates at or below the threshold and rank the rest
#[derive(Debug, Clone)]
pub struct SearchEngine {
    dataset: Arc<[RestaurantRecord]>,
    settings: SearchSettings,
}

impl SearchEngine {
    pub fn new(dataset: impl Into<Arc<[RestaurantRecord]>>, settings: SearchSettings) -> Self {
        Self {
            dataset: dataset.into(),
            settings,
        }
    }

    pub fn with_default_settings(dataset: impl Into<Arc<[RestaurantRecord]>>) -> Self {
        Self::new(dataset, SearchSettings::default())
    }

    pub fn dataset(&self) -> &[RestaurantRecord] {
        &self.dataset
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Run one search
    ///
    /// Invalid filters never abort the search: the error is reported in the
    /// outcome and the whole catalog is searched instead.
    pub fn search(&self, request: &SearchRequest) -> SearchOutcome {
        let compiler = FilterCompiler::new(self.settings.min_price);

        let (filter, filter_error) = match compiler.compile(&request.input) {
            Ok(filter) => (filter, None),
            Err(e) => {
                tracing::warn!("Invalid filters provided in {:?}: {}", request.input, e);
                (CompiledFilter::default(), Some(e))
            }
        };

        let filtered: Vec<RestaurantRecord>;
        let candidates: &[RestaurantRecord] = if filter.predicate.is_empty() {
            &self.dataset
        } else {
            filtered = self
                .dataset
                .iter()
                .filter(|record| filter.predicate.matches(record))
                .cloned()
                .collect();
            &filtered
        };

        let total_candidates = candidates.len();
        tracing::info!(
            "Number of searchable documents: {} (filter: {:?})",
            total_candidates,
            filter.expression()
        );

        let query = query_text(&request.input).to_string();
        let scorer = scorer_for(request.engine, self.settings.similarity_threshold);
        let results = rank(&*scorer, &query, candidates);

        SearchOutcome {
            query,
            filter,
            filter_error,
            total_candidates,
            results,
        }
    }
}
