pub mod distance;
pub mod error;
pub mod logistic_regression;
pub mod nearest_neighbours;
pub mod parse;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
