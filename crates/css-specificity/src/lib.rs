//! Weighted CSS selector specificity scoring.
//!
//! The crate splits a selector into simple-selector tokens, classifies every
//! token against a fixed table of lexical categories and sums the category
//! weights. Scoring is total over all strings: malformed selectors simply
//! score low (often zero) rather than failing.
//!
//! ```
//! use css_specificity::{calculate_specificity, compare};
//!
//! assert_eq!(calculate_specificity("div.big a#foo"), 112);
//! assert_eq!(compare(".big", ".small"), ".small");
//! ```

mod category;
mod compare;
mod specificity;
mod splitter;

pub use category::{Category, classify};
pub use compare::{cmp_specificity, compare, most_specific};
pub use specificity::{SpecificityBreakdown, calculate_specificity, token_specificity};
pub use splitter::{NEGATION_OPEN, split_selector, tokens};
