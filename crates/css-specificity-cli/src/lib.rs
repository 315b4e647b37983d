//! Command line front end for `css-specificity`.
//!
//! The binary scores selectors, compares two selectors and ranks a list of
//! selectors by cascade precedence. All scoring is delegated to the
//! `css-specificity` library; this crate only adds argument parsing,
//! configuration, logging and output rendering.
//!
//! # Configuration
//!
//! - `CSS_SPECIFICITY_LOG_LEVEL`: Log verbosity (trace, debug, info, warn,
//!   error)
//! - `CSS_SPECIFICITY_FORMAT`: Output format (text, json)
//!
//! Both can be overridden with `--log-level` and `--format`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
