//! Cascade comparison between selectors.
//!
//! Ties always go to the selector that appears later, mirroring the cascade
//! rule that the last declaration wins.

use crate::specificity::calculate_specificity;
use std::cmp::Ordering;

/// Return whichever of `a` and `b` wins a cascade conflict.
///
/// `a` wins only when its specificity is strictly greater; on a tie `b` is
/// returned. The winner is returned unmodified.
///
/// # Examples
///
/// ```
/// use css_specificity::compare;
///
/// assert_eq!(compare("div.big", ".small"), "div.big");
/// assert_eq!(compare(".big", ".small"), ".small");
/// ```
#[must_use]
pub fn compare<'a>(a: &'a str, b: &'a str) -> &'a str {
    let (score_a, score_b) = (calculate_specificity(a), calculate_specificity(b));
    let winner = if score_a > score_b { a } else { b };
    tracing::debug!(a, score_a, b, score_b, winner, "compared selectors");
    winner
}

/// Order two selectors by specificity alone.
///
/// # Examples
///
/// ```
/// use css_specificity::cmp_specificity;
/// use std::cmp::Ordering;
///
/// assert_eq!(cmp_specificity("#id", ".class"), Ordering::Greater);
/// assert_eq!(cmp_specificity(".big", ".small"), Ordering::Equal);
/// ```
#[must_use]
pub fn cmp_specificity(a: &str, b: &str) -> Ordering {
    calculate_specificity(a).cmp(&calculate_specificity(b))
}

/// Return the selector that wins the cascade among `selectors`.
///
/// Folds [`compare`] from left to right, so the highest score wins and ties
/// go to the later selector. Returns `None` when `selectors` is empty.
///
/// # Examples
///
/// ```
/// use css_specificity::most_specific;
///
/// assert_eq!(most_specific(["p", ".a", "div", ".b"]), Some(".b"));
/// assert_eq!(most_specific(Vec::<&str>::new()), None);
/// ```
#[must_use]
pub fn most_specific<'a, I>(selectors: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    selectors.into_iter().reduce(compare)
}
