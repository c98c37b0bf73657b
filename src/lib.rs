pub mod application;
pub mod assess;
pub mod batch;
pub mod cli;
pub mod error;
pub mod logging;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod template;
pub mod types;
pub mod validate;

pub use scoring::{calculate_category_scores, calculate_overall_score};
