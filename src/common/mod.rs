pub mod config;
pub mod errors;
pub mod event;
pub mod utils;

pub use config::{NewBookConfig, RecommendationConfig};
pub use errors::{BookError, Error};
