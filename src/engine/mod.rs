//! The indent engine: pure width computation over the Fibonacci ladder.
//!
//! Nothing in here touches an editor. Given the text before the cursor and
//! the configured tab size it decides how many spaces bridge the current
//! indent width to the ladder.

pub mod fibonacci;
pub mod indent;

pub use indent::{compute_insertion, indent_width, is_whitespace_run};
