use std::fmt;

use thiserror::Error;

use crate::models::RestaurantRecord;

/// Prices below this are treated as "no price filter"
pub const DEFAULT_MIN_PRICE: i64 = 10;

/// `query,distance,rating,price,cuisine`
pub const MAX_SEGMENTS: usize = 5;

/// Errors produced while compiling a filter string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("expected at most {max} comma-separated segments, got {found}")]
    TooManySegments { found: usize, max: usize },
}

/// One constraint on a restaurant attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    MaxDistance(i64),
    MinRating(i64),
    MaxPrice(i64),
    /// Title-cased needle, matched case-insensitively
    CuisineContains(String),
}

impl Clause {
    #[inline]
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        match self {
            Clause::MaxDistance(max) => i64::from(record.distance) <= *max,
            Clause::MinRating(min) => i64::from(record.customer_rating) >= *min,
            Clause::MaxPrice(max) => i64::from(record.price) <= *max,
            Clause::CuisineContains(needle) => record
                .cuisine
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::MaxDistance(v) => write!(f, "distance <= {}", v),
            Clause::MinRating(v) => write!(f, "customer_rating >= {}", v),
            Clause::MaxPrice(v) => write!(f, "price <= {}", v),
            Clause::CuisineContains(v) => write!(f, "cuisine contains {:?}", v),
        }
    }
}

/// Conjunction of clauses. Empty means every record passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[inline]
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Normalized filter values plus the predicate built from them.
///
/// Numeric fields are 0 when unset, `cuisine` is `None` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledFilter {
    pub distance: i64,
    pub rating: i64,
    pub price: i64,
    pub cuisine: Option<String>,
    pub predicate: Predicate,
}

impl CompiledFilter {
    /// Predicate rendered as text, empty when there is nothing to filter on
    pub fn expression(&self) -> String {
        self.predicate.to_string()
    }
}

/// Parses `query[,distance][,rating][,price][,cuisine]` into a predicate
#[derive(Debug, Clone, Copy)]
pub struct FilterCompiler {
    min_price: i64,
}

impl FilterCompiler {
    pub fn new(min_price: i64) -> Self {
        Self { min_price }
    }

    pub fn min_price(&self) -> i64 {
        self.min_price
    }

    /// Compile a filter string
    ///
    /// Segments are positional. Each constraint is independent and
    /// constraints that are set are ANDed in the order distance, rating,
    /// price, cuisine. A constraint is set when:
    /// - distance > 0
    /// - rating > 0
    /// - price >= the minimum price gate
    /// - cuisine is non-blank and not purely numeric
    pub fn compile(&self, input: &str) -> Result<CompiledFilter, FilterError> {
        let segments: Vec<&str> = input.split(',').collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(FilterError::TooManySegments {
                found: segments.len(),
                max: MAX_SEGMENTS,
            });
        }

        let distance = parse_segment(&segments, 1, "distance")?;
        let rating = parse_segment(&segments, 2, "rating")?;
        let price = match parse_segment(&segments, 3, "price")? {
            p if p >= self.min_price => p,
            _ => 0,
        };
        let cuisine = segments.get(4).and_then(|s| parse_cuisine(s));

        let mut clauses = Vec::with_capacity(segments.len() - 1);
        if distance > 0 {
            clauses.push(Clause::MaxDistance(distance));
        }
        if rating > 0 {
            clauses.push(Clause::MinRating(rating));
        }
        if price > 0 {
            clauses.push(Clause::MaxPrice(price));
        }
        if let Some(cuisine) = &cuisine {
            clauses.push(Clause::CuisineContains(cuisine.clone()));
        }

        let compiled = CompiledFilter {
            distance,
            rating,
            price,
            cuisine,
            predicate: Predicate::new(clauses),
        };

        tracing::debug!("Compiled filter {:?} -> {:?}", input, compiled.expression());

        Ok(compiled)
    }
}

impl Default for FilterCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE)
    }
}

/// Compile with the default minimum price gate
pub fn compile_filter(input: &str) -> Result<CompiledFilter, FilterError> {
    FilterCompiler::default().compile(input)
}

/// The free-text part of the input, i.e. everything before the first comma
pub fn query_text(input: &str) -> &str {
    input
        .split_once(',')
        .map_or(input, |(query, _)| query)
        .trim()
}

fn parse_segment(
    segments: &[&str],
    index: usize,
    field: &'static str,
) -> Result<i64, FilterError> {
    let Some(raw) = segments.get(index) else {
        return Ok(0);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse::<i64>().map_err(|_| FilterError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_cuisine(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().all(char::is_numeric) {
        return None;
    }
    Some(title_case(raw))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
