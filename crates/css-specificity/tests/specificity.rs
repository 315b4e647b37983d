//! Reference cases for selector scoring and cascade comparison.

use css_specificity::{
    Category, SpecificityBreakdown, calculate_specificity, compare, most_specific, split_selector,
};
use rstest::rstest;

#[rstest]
#[case("body", 1)]
#[case("p", 1)]
#[case("::before", 1)]
#[case(".foo", 10)]
#[case(":hover", 10)]
#[case("[id='foo']", 10)]
#[case("#foo", 100)]
fn scores_simple_selectors(#[case] selector: &str, #[case] expected: u64) {
    assert_eq!(calculate_specificity(selector), expected);
}

#[rstest]
#[case("div.big", 11)]
#[case("a#foo", 101)]
fn scores_compound_selectors(#[case] selector: &str, #[case] expected: u64) {
    assert_eq!(calculate_specificity(selector), expected);
}

#[rstest]
#[case("p a.foo", 12)]
#[case(".foo .bar", 20)]
#[case(".foo a[id='foo']", 21)]
#[case(".foo a#foo", 111)]
#[case("div.big a#foo", 112)]
#[case(".foo .bar a#foo:hover", 131)]
#[case("div.foo p#desc span[id='foo']::before", 124)]
fn scores_nested_selectors(#[case] selector: &str, #[case] expected: u64) {
    assert_eq!(calculate_specificity(selector), expected);
}

#[rstest]
#[case(".")]
#[case("#")]
#[case("")]
fn invalid_selectors_score_zero(#[case] selector: &str) {
    assert_eq!(calculate_specificity(selector), 0);
}

#[rstest]
#[case(">")]
#[case("+")]
#[case("~")]
fn combinators_do_not_change_the_score(#[case] combinator: &str) {
    let joined = format!("p {combinator} a.foo");
    assert_eq!(calculate_specificity(&joined), calculate_specificity("p a.foo"));
}

#[test]
fn negation_is_scored_like_a_descendant() {
    assert_eq!(
        calculate_specificity("div:not(p)"),
        calculate_specificity("div p")
    );
    assert_eq!(split_selector("div:not(p)").len(), 2);
    assert_eq!(split_selector("div:lang(fr)").len(), 1);
}

#[rstest]
#[case("body p", "div", "body p")]
#[case(".class", "#id", "#id")]
#[case("div.big", ".small", "div.big")]
#[case(".big", ".small", ".small")]
fn compare_picks_the_winner(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
    assert_eq!(compare(a, b), expected);
}

#[test]
fn rank_and_breakdown_agree_with_scores() {
    let rules = ["nav a", ".menu a", "nav .menu a:hover", "#top a"];
    assert_eq!(most_specific(rules), Some("#top a"));

    for rule in rules {
        let breakdown = SpecificityBreakdown::calculate(rule);
        assert_eq!(breakdown.total(), calculate_specificity(rule));
    }

    let hover = SpecificityBreakdown::calculate("nav .menu a:hover");
    assert_eq!(hover.count(Category::PseudoClass), 1);
    assert_eq!(hover.count(Category::Element), 2);
}
