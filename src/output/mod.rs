//! Output formatting for assertion results.
//!
//! This module provides configurable rendering of [`PredicateResult`]s for
//! terminal display, with support for showing messages always, only on
//! non-match (the default), or never.
//!
//! # Example
//!
//! ```rust,ignore
//! use veracity::output::{OutputConfig, OutputMode, ResultFormatter};
//!
//! let config = OutputConfig::new()
//!     .messages(OutputMode::Always)
//!     .colors(false);
//!
//! let formatter = ResultFormatter::new(config);
//! println!("{}", formatter.format_result(&result, Some("<0>")));
//! ```
//!
//! [`PredicateResult`]: crate::result::PredicateResult

mod config;
mod formatter;

pub use config::{OutputConfig, OutputMode};
pub use formatter::ResultFormatter;
