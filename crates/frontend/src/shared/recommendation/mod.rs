pub mod parser;
pub mod ui;

pub use parser::{parse, RecommendationItem};
