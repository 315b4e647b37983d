//! Selector splitting into independently classified tokens.

/// Opening of a negation pseudo-class. Selectors are split on it so the
/// negated interior is scored on its own.
pub const NEGATION_OPEN: &str = ":not(";

/// Lazily yield the tokens of `selector`, left to right.
///
/// The selector is split on single spaces and every fragment is split again
/// on [`NEGATION_OPEN`]. Other combinators (`>`, `+`, `~`) stay as tokens of
/// their own and consecutive spaces yield empty tokens.
///
/// # Examples
///
/// ```
/// use css_specificity::tokens;
///
/// let parts: Vec<_> = tokens("ul > li:not(.done)").collect();
/// assert_eq!(parts, vec!["ul", ">", "li", ".done)"]);
/// ```
pub fn tokens(selector: &str) -> impl Iterator<Item = &str> + '_ {
    selector
        .split(' ')
        .flat_map(|fragment| fragment.split(NEGATION_OPEN))
}

/// Split `selector` into its tokens.
///
/// Collecting form of [`tokens`]. The empty selector yields a single empty
/// token.
///
/// # Examples
///
/// ```
/// use css_specificity::split_selector;
///
/// assert_eq!(split_selector("div:not(p)"), vec!["div", "p)"]);
/// assert_eq!(split_selector("div:lang(fr)"), vec!["div:lang(fr)"]);
/// assert_eq!(split_selector(""), vec![""]);
/// ```
#[must_use]
pub fn split_selector(selector: &str) -> Vec<&str> {
    tokens(selector).collect()
}
