// Service exports
pub mod dataset;

pub use dataset::{load_cuisines, load_dataset, load_restaurants, DatasetError};
