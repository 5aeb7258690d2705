//! Display preparation for the dashboard pages.
//!
//! These helpers clean catalog data and classification responses before the
//! host renders them. They are independent of the accessibility engine.

pub mod catalog;
pub mod media;
pub mod prediction;
pub mod text;

pub use catalog::{CategoryPath, UNKNOWN_CATEGORY, format_specifications};
pub use media::ImageMetrics;
pub use prediction::{
    CategoryScore, ErrorHint, Prediction, PredictionResult, ScoreRow, format_confidence,
    format_inference_time,
};
pub use text::{
    clean_generic_text, compose_description, shorten_category_name, summarize_description,
};
