//! Font loading and text metrics.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{TextMeasure, TextMetrics};
