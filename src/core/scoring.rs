use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::similarity::{jaro, token_set_ratio};
use crate::models::{RestaurantRecord, ScoredResult, ScorerKind};

/// Candidates must score strictly above this to be returned
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// A similarity metric together with its inclusion threshold and the
/// ordering used to rank what passes it.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Similarity of `candidate` to `query` in [0, 1], higher is closer
    fn similarity(&self, query: &str, candidate: &str) -> f64;

    fn threshold(&self) -> f64;

    /// Ranking order, `Less` means `a` is listed first
    fn compare(&self, a: &ScoredResult, b: &ScoredResult) -> Ordering;
}

/// Token-set edit-distance ratio
///
/// Ranked by score (desc), then distance (asc), price (desc), rating (desc).
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceScorer {
    threshold: f64,
}

impl EditDistanceScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for EditDistanceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl Scorer for EditDistanceScorer {
    fn name(&self) -> &'static str {
        "edit_distance"
    }

    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        token_set_ratio(&query.to_lowercase(), &candidate.to_lowercase())
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn compare(&self, a: &ScoredResult, b: &ScoredResult) -> Ordering {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| attribute_order(a, b))
    }
}

/// Jaro similarity
///
/// The score only decides inclusion. Results are ranked by distance (asc),
/// then price (desc), rating (desc).
#[derive(Debug, Clone, Copy)]
pub struct JaroScorer {
    threshold: f64,
}

impl JaroScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for JaroScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl Scorer for JaroScorer {
    fn name(&self) -> &'static str {
        "jaro"
    }

    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        jaro(&query.to_lowercase(), &candidate.to_lowercase())
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn compare(&self, a: &ScoredResult, b: &ScoredResult) -> Ordering {
        attribute_order(a, b)
    }
}

/// Closer first, then the higher price, then the higher rating
#[inline]
fn attribute_order(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.price.cmp(&a.price))
        .then_with(|| b.rating.cmp(&a.rating))
}

pub fn scorer_for(kind: ScorerKind, threshold: f64) -> Box<dyn Scorer> {
    match kind {
        ScorerKind::EditDistance => Box::new(EditDistanceScorer::new(threshold)),
        ScorerKind::Jaro => Box::new(JaroScorer::new(threshold)),
    }
}

/// Score every candidate, drop those at or below the threshold and sort
/// the rest with the scorer's ordering.
///
/// The sort is stable, so fully tied results keep dataset order.
pub fn rank<S>(scorer: &S, query: &str, candidates: &[RestaurantRecord]) -> Vec<ScoredResult>
where
    S: Scorer + ?Sized,
{
    let threshold = scorer.threshold();
    let score = |record: &RestaurantRecord| {
        let score = scorer.similarity(query, &record.name);
        (score > threshold).then(|| ScoredResult::from_record(record, score))
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<ScoredResult> = candidates.par_iter().filter_map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<ScoredResult> = candidates.iter().filter_map(score).collect();

    results.sort_by(|a, b| scorer.compare(a, b));

    tracing::debug!(
        "{} scorer kept {} of {} candidates for {:?}",
        scorer.name(),
        results.len(),
        candidates.len(),
        query
    );

    results
}

/// Rank with the token-set edit-distance ratio at the default threshold
pub fn score_edit_distance(query: &str, candidates: &[RestaurantRecord]) -> Vec<ScoredResult> {
    rank(&EditDistanceScorer::default(), query, candidates)
}

/// Rank with Jaro similarity at the default threshold
pub fn score_jaro(query: &str, candidates: &[RestaurantRecord]) -> Vec<ScoredResult> {
    rank(&JaroScorer::default(), query, candidates)
}
