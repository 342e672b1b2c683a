// Unit tests for measures.
//
// Tests the score functions through the Measure factory: identity on equal
// inputs, known values, bounds of the normalized distances, and the
// errors raised for inputs a measure cannot handle.

use timemap_drift::measures::count::relative_change;
use timemap_drift::measures::distance::{jaccard, levenshtein, normalized_levenshtein, sorensen};
use timemap_drift::measures::measure::Measure;
use timemap_drift::text::prepare::PreparedContent;

fn text(s: &str) -> PreparedContent {
    PreparedContent::Text(s.to_string())
}

fn tokens(words: &[&str]) -> PreparedContent {
    PreparedContent::Tokens(words.iter().map(|w| w.to_string()).collect())
}

fn score(measure: Measure, first: &PreparedContent, current: &PreparedContent) -> f64 {
    measure
        .score_function()
        .compute(first, current)
        .unwrap()
        .comparison_score
}

// ============================================================
// Identity
// ============================================================

#[test]
fn identical_token_lists_score_zero() {
    let t = tokens(&["cat", "sat", "mat"]);
    for measure in Measure::ALL.into_iter().filter(|m| m.is_implemented()) {
        assert_eq!(score(measure, &t, &t), 0.0, "{measure}");
    }
}

#[test]
fn identical_text_scores_zero() {
    let t = text("the cat sat on the mat");
    for measure in Measure::ALL
        .into_iter()
        .filter(|m| m.is_implemented() && *m != Measure::WordCount)
    {
        assert_eq!(score(measure, &t, &t), 0.0, "{measure}");
    }
}

// ============================================================
// Known values
// ============================================================

#[test]
fn token_measures_on_growing_page() {
    let first = tokens(&["cat", "sat"]);
    let current = tokens(&["cat", "sat", "mat"]);

    assert!((score(Measure::WordCount, &first, &current) - -0.5).abs() < 1e-9);
    assert!((score(Measure::Jaccard, &first, &current) - 1.0 / 3.0).abs() < 1e-9);
    assert!((score(Measure::Sorensen, &first, &current) - 0.2).abs() < 1e-9);
    assert_eq!(score(Measure::Levenshtein, &first, &current), 1.0);
    assert!((score(Measure::NormalizedLevenshtein, &first, &current) - 1.0 / 3.0).abs() < 1e-9);
    // "catsat" (6 bytes) -> "catsatmat" (9 bytes)
    assert!((score(Measure::ByteCount, &first, &current) - -0.5).abs() < 1e-9);
}

#[test]
fn individual_scores() {
    let first = text("abcd");
    let current = text("abcdefgh");
    let bytes = Measure::ByteCount
        .score_function()
        .compute(&first, &current)
        .unwrap();
    assert_eq!(bytes.individual_score, Some(8));
    assert_eq!(bytes.comparison_score, -1.0);

    let jaccard = Measure::Jaccard
        .score_function()
        .compute(&first, &current)
        .unwrap();
    assert_eq!(jaccard.individual_score, None);
}

#[test]
fn shrinking_to_nothing_scores_one() {
    assert_eq!(score(Measure::ByteCount, &text("abc"), &text("")), 1.0);
    assert_eq!(score(Measure::WordCount, &tokens(&["a"]), &tokens(&[])), 1.0);
}

#[test]
fn set_measures_ignore_order_and_repeats() {
    let a = tokens(&["cat", "sat", "cat"]);
    let b = tokens(&["sat", "cat"]);
    assert_eq!(score(Measure::Jaccard, &a, &b), 0.0);
    assert_eq!(score(Measure::Sorensen, &a, &b), 0.0);
    assert!(score(Measure::Levenshtein, &a, &b) > 0.0);
}

#[test]
fn normalized_distances_stay_in_unit_interval() {
    let pairs = [
        ("", "abc"),
        ("kitten", "sitting"),
        ("abc", "xyz"),
        ("archive", "archived"),
    ];
    for (a, b) in pairs {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        for d in [jaccard(&a, &b), sorensen(&a, &b), normalized_levenshtein(&a, &b)] {
            assert!((0.0..=1.0).contains(&d), "{d} out of range");
        }
        assert!(levenshtein(&a, &b) <= a.len().max(b.len()));
        assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }
}

// ============================================================
// Errors
// ============================================================

#[test]
fn empty_reference_is_an_error() {
    assert!(relative_change(0, 1).is_err());
    assert!(Measure::ByteCount
        .score_function()
        .compute(&text(""), &text("new"))
        .is_err());
    assert!(Measure::WordCount
        .score_function()
        .compute(&tokens(&[]), &tokens(&["new"]))
        .is_err());
}

#[test]
fn mixed_content_kinds_are_rejected() {
    for measure in [
        Measure::Jaccard,
        Measure::Sorensen,
        Measure::Levenshtein,
        Measure::NormalizedLevenshtein,
    ] {
        assert!(
            measure
                .score_function()
                .compute(&text("cat"), &tokens(&["cat"]))
                .is_err(),
            "{measure}"
        );
    }
}

#[test]
fn cosine_function_refuses_to_score() {
    let t = tokens(&["cat"]);
    assert!(Measure::Cosine.score_function().compute(&t, &t).is_err());
}
