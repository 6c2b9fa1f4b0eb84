pub use context::FilterContext;
pub use engine::FilterEngine;
pub use result::FilterResult;
pub use thresholds::FilterThresholds;

pub mod checks;
mod context;
mod engine;
pub mod names;
mod result;
mod thresholds;
