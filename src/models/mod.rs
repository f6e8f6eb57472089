// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Restaurant, Cuisine, RestaurantRecord, ScoredResult, ScorerKind};
pub use requests::SearchRequest;
pub use responses::SearchResponse;
