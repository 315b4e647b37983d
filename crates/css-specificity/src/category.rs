//! Lexical selector categories and their weights.
//!
//! Each category pairs a pattern with a weight. A token is tested against
//! every category independently, so one token can fall into several
//! categories at once (`a#foo` is both an element and an id).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Word classes are ASCII-only (`[[:word:]]`), matching `[0-9A-Za-z_]`.
static ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+").unwrap_or_else(|_| unreachable!()));
static PSEUDO_ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":{2}[a-zA-Z]+").unwrap_or_else(|_| unreachable!()));
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[[:word:]]+").unwrap_or_else(|_| unreachable!()));
// Anchored to the whole token: matches only when the token holds exactly one colon.
static PSEUDO_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:word:]]*[^:]*:[^:]*[[:word:]]*$").unwrap_or_else(|_| unreachable!())
});
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.+\]").unwrap_or_else(|_| unreachable!()));
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[[:word:]]+").unwrap_or_else(|_| unreachable!()));

/// Category a selector token can be classified into.
///
/// Variants are declared in evaluation order. The order never changes a
/// score because every matching category contributes independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Type selector such as `div` or `body`.
    Element,
    /// Pseudo-element such as `::before`.
    PseudoElement,
    /// Class selector such as `.foo`.
    Class,
    /// Pseudo-class such as `:hover`.
    PseudoClass,
    /// Attribute selector such as `[id='foo']`.
    Attribute,
    /// ID selector such as `#foo`.
    Id,
}

impl Category {
    /// Every category, in evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::PseudoElement,
        Self::Class,
        Self::PseudoClass,
        Self::Attribute,
        Self::Id,
    ];

    /// Return the symbolic name of the category.
    ///
    /// # Examples
    ///
    /// ```
    /// use css_specificity::Category;
    ///
    /// assert_eq!(Category::PseudoElement.name(), "pseudo-element");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::PseudoElement => "pseudo-element",
            Self::Class => "class",
            Self::PseudoClass => "pseudo-class",
            Self::Attribute => "attribute",
            Self::Id => "id",
        }
    }

    /// Return the weight a matching token contributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use css_specificity::Category;
    ///
    /// assert_eq!(Category::Element.weight(), 1);
    /// assert_eq!(Category::Attribute.weight(), 10);
    /// assert_eq!(Category::Id.weight(), 100);
    /// ```
    #[must_use]
    pub const fn weight(self) -> u64 {
        match self {
            Self::Element | Self::PseudoElement => 1,
            Self::Class | Self::PseudoClass | Self::Attribute => 10,
            Self::Id => 100,
        }
    }

    /// Report whether `token` falls into this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use css_specificity::Category;
    ///
    /// assert!(Category::Element.matches("div#main"));
    /// assert!(Category::Id.matches("div#main"));
    /// assert!(!Category::PseudoClass.matches("div#main"));
    /// ```
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        self.pattern().is_match(token)
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Element => &ELEMENT_RE,
            Self::PseudoElement => &PSEUDO_ELEMENT_RE,
            Self::Class => &CLASS_RE,
            Self::PseudoClass => &PSEUDO_CLASS_RE,
            Self::Attribute => &ATTRIBUTE_RE,
            Self::Id => &ID_RE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yield every category `token` matches, in evaluation order.
///
/// # Examples
///
/// ```
/// use css_specificity::{Category, classify};
///
/// let matched: Vec<_> = classify("a#foo:hover").collect();
/// assert_eq!(
///     matched,
///     vec![Category::Element, Category::PseudoClass, Category::Id]
/// );
/// ```
pub fn classify(token: &str) -> impl Iterator<Item = Category> + '_ {
    Category::ALL
        .into_iter()
        .filter(move |category| category.matches(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matched(token: &str) -> Vec<Category> {
        classify(token).collect()
    }

    #[rstest]
    #[case("body", &[Category::Element])]
    #[case("::before", &[Category::PseudoElement])]
    #[case(".foo", &[Category::Class])]
    #[case(":hover", &[Category::PseudoClass])]
    #[case("[id='foo']", &[Category::Attribute])]
    #[case("#foo", &[Category::Id])]
    fn simple_selectors_match_one_category(#[case] token: &str, #[case] expected: &[Category]) {
        assert_eq!(matched(token), expected);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("#")]
    #[case("*")]
    #[case(">")]
    #[case("+")]
    #[case("~")]
    #[case("[]")]
    fn fragments_match_nothing(#[case] token: &str) {
        assert!(matched(token).is_empty(), "{token:?} should not classify");
    }

    #[test]
    fn id_token_with_element_is_not_a_pseudo_class() {
        assert_eq!(matched("div#id"), vec![Category::Element, Category::Id]);
    }

    #[test]
    fn pseudo_class_requires_the_whole_token_to_have_one_colon() {
        assert!(Category::PseudoClass.matches("a#foo:hover"));
        assert!(Category::PseudoClass.matches("li:nth-child(1n+0)"));
        assert!(!Category::PseudoClass.matches("p::before"));
        assert!(!Category::PseudoClass.matches("a:hover:focus"));
    }

    #[test]
    fn pseudo_element_needs_letters_after_the_double_colon() {
        assert!(Category::PseudoElement.matches("span::after"));
        assert!(!Category::PseudoElement.matches("::"));
        assert!(!Category::PseudoElement.matches("::-moz-selection"));
    }

    #[test]
    fn element_is_anchored_to_the_token_start() {
        assert!(Category::Element.matches("h1"));
        assert!(!Category::Element.matches(".div"));
        assert!(!Category::Element.matches("1h"));
    }

    #[test]
    fn word_classes_are_ascii_only() {
        assert!(!Category::Class.matches(".é"));
        assert!(Category::Class.matches("._x1"));
        assert!(!Category::Id.matches("#ü"));
    }

    #[test]
    fn weights_and_names_follow_declaration_order() {
        let table: Vec<_> = Category::ALL
            .iter()
            .map(|category| (category.name(), category.weight()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("element", 1),
                ("pseudo-element", 1),
                ("class", 10),
                ("pseudo-class", 10),
                ("attribute", 10),
                ("id", 100),
            ]
        );
    }

    #[test]
    fn display_uses_symbolic_name() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
    }
}
