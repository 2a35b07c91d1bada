//! Descriptive itemset metrics and the demo rule fallback.
//!
//! The "confidence" and "lift" computed here are relative to the whole
//! itemset list (support over max support, support over mean support). They
//! share names with rule metrics but are different formulas, so they are
//! exposed as `relative_confidence` and `relative_lift`.

pub mod annotator;
pub mod fallback;

pub use annotator::{annotate, AnnotatedItemset};
pub use fallback::demo_fallback_rules;
