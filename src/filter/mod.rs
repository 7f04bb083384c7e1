//! Filter/sort pipeline - filter state, rules, ranking, and composition

mod pipeline;
pub mod rank;
pub mod rules;
mod state;

pub use pipeline::{CategorySource, Pipeline, PipelineConfig};
pub use state::FilterState;
