//! Application-level configuration.
//!
//! - [`SelectionParams`] - how a single draw behaves (ratio, exclusion, dry run)

pub mod selection_params;

pub use selection_params::SelectionParams;
