//! Specificity calculation for selector strings.
//!
//! A selector's specificity is the sum of the weights of every category
//! matched by every one of its tokens. Scoring never fails: fragments that
//! match no category contribute nothing.

use crate::category::{Category, classify};
use crate::splitter::tokens;
use std::fmt;

/// Return the summed weight of every category `token` matches.
///
/// # Examples
///
/// ```
/// use css_specificity::token_specificity;
///
/// assert_eq!(token_specificity("a#foo"), 101);
/// assert_eq!(token_specificity(">"), 0);
/// ```
#[must_use]
pub fn token_specificity(token: &str) -> u64 {
    let score: u64 = classify(token).map(Category::weight).sum();
    tracing::trace!(token, score, "classified selector token");
    score
}

/// Calculate the specificity of a selector.
///
/// # Examples
///
/// ```
/// use css_specificity::calculate_specificity;
///
/// assert_eq!(calculate_specificity("div.big"), 11);
/// assert_eq!(calculate_specificity(".foo .bar a#foo:hover"), 131);
/// assert_eq!(calculate_specificity("*"), 0);
/// ```
#[must_use]
pub fn calculate_specificity(selector: &str) -> u64 {
    tokens(selector).map(token_specificity).sum()
}

/// Per-category match counts for a selector.
///
/// Each field counts the tokens that matched the corresponding category. A
/// token matching several categories is counted once in each.
///
/// # Examples
///
/// ```
/// use css_specificity::{Category, SpecificityBreakdown};
///
/// let breakdown = SpecificityBreakdown::calculate(".foo a#foo:hover");
/// assert_eq!(breakdown.count(Category::Class), 1);
/// assert_eq!(breakdown.ids, 1);
/// assert_eq!(breakdown.total(), 121);
/// assert_eq!(breakdown.to_string(), "1,2,1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecificityBreakdown {
    /// Tokens matching the element category.
    pub elements: usize,
    /// Tokens matching the pseudo-element category.
    pub pseudo_elements: usize,
    /// Tokens matching the class category.
    pub classes: usize,
    /// Tokens matching the pseudo-class category.
    pub pseudo_classes: usize,
    /// Tokens matching the attribute category.
    pub attributes: usize,
    /// Tokens matching the id category.
    pub ids: usize,
}

impl SpecificityBreakdown {
    /// Count category matches across every token of `selector`.
    #[must_use]
    pub fn calculate(selector: &str) -> Self {
        let mut breakdown = Self::default();
        for category in tokens(selector).flat_map(classify) {
            *breakdown.slot(category) += 1;
        }
        breakdown
    }

    /// Return how many tokens matched `category`.
    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        match category {
            Category::Element => self.elements,
            Category::PseudoElement => self.pseudo_elements,
            Category::Class => self.classes,
            Category::PseudoClass => self.pseudo_classes,
            Category::Attribute => self.attributes,
            Category::Id => self.ids,
        }
    }

    /// Return the weighted sum of the counts.
    ///
    /// Always equal to [`calculate_specificity`] of the same selector.
    #[must_use]
    pub fn total(&self) -> u64 {
        Category::ALL
            .into_iter()
            .map(|category| category.weight() * self.count(category) as u64)
            .sum()
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Element => &mut self.elements,
            Category::PseudoElement => &mut self.pseudo_elements,
            Category::Class => &mut self.classes,
            Category::PseudoClass => &mut self.pseudo_classes,
            Category::Attribute => &mut self.attributes,
            Category::Id => &mut self.ids,
        }
    }
}

impl fmt::Display for SpecificityBreakdown {
    /// Render as `ids,class-like,element-like`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.ids,
            self.classes + self.pseudo_classes + self.attributes,
            self.elements + self.pseudo_elements
        )
    }
}
