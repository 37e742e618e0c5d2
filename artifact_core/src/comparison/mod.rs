//! Comparison - Scoring two artifact builds against each other

mod resolution;
mod result;

pub use resolution::{compare, evaluate};
pub use result::{Build, Comparison, ComparisonInput, ComparisonResult, Winner};
