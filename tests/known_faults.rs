//! Faulty variants of the functions are caught, and shrunk to minimal counterexamples.

use auxiliary_methods::verify::{
    counter_properties, isomorphism_properties, reverse_properties, CheckerConfig, Subject, Summary, Verifier,
};
use test_log::test;

/// Only loops while `x > 0`, so every negative input reverses to 0.
fn reverse_positive_only(mut x: i32) -> i32 {
    let mut reversed: i64 = 0;
    while x > 0 {
        reversed = reversed * 10 + (x % 10) as i64;
        x /= 10;
    }
    i32::try_from(reversed).unwrap_or(0)
}

/// Wraps around instead of detecting overflow.
fn reverse_wrapping(mut x: i32) -> i32 {
    let mut reversed: i32 = 0;
    while x != 0 {
        reversed = reversed.wrapping_mul(10).wrapping_add(x % 10);
        x /= 10;
    }
    reversed
}

/// Skips the length guard and indexes into `t` by the positions of `s`.
#[allow(clippy::needless_range_loop)]
fn isomorphic_unguarded(s: &str, t: &str) -> bool {
    let (s, t) = (s.as_bytes(), t.as_bytes());
    let mut forward = [-1i32; 256];
    let mut backward = [-1i32; 256];
    for i in 0..s.len() {
        let (a, b) = (s[i] as usize, t[i] as usize);
        if forward[a] == -1 && backward[b] == -1 {
            forward[a] = b as i32;
            backward[b] = a as i32;
        } else if forward[a] != b as i32 || backward[b] != a as i32 {
            return false;
        }
    }
    true
}

/// Tracks only the `s → t` direction.
fn isomorphic_one_way(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }
    let mut forward = std::collections::HashMap::new();
    s.chars().zip(t.chars()).all(|(a, b)| *forward.entry(a).or_insert(b) == b)
}

/// Recognizes only positive odd values via `x % 2 == 1`.
fn odd_or_pos_positive_odd_only(values: &[i32]) -> usize {
    values.iter().filter(|&&x| x % 2 == 1 || x > 0).count()
}

fn run(subject: Subject, properties: fn(&Subject) -> Vec<Box<dyn auxiliary_methods::verify::Check>>) -> Summary {
    let config = CheckerConfig::default().with_seed(7);
    Verifier::new(config).with_properties(properties(&subject)).run()
}

fn failed(summary: &Summary) -> Vec<&str> {
    summary.failures().map(|r| r.property.as_str()).collect()
}

#[test]
fn negative_reversal_fault_is_caught() {
    let subject = Subject {
        reverse: reverse_positive_only,
        ..Subject::default()
    };
    let summary = run(subject, reverse_properties);

    let report = summary.report("reverse_handles_negatives").unwrap();
    let cex = report.counterexample().expect("negative inputs must be caught");
    assert_eq!(cex.minimal, "-1");
    assert_eq!(cex.mismatch.expected, "-1");
    assert_eq!(cex.mismatch.actual, "0");

    // Round trip and sign checks skip zero results, so they cannot see this fault.
    assert!(summary.report("reverse_twice_restores_input").unwrap().is_passed());
    assert!(summary.report("reverse_preserves_sign").unwrap().is_passed());
}

#[test]
fn wrapping_overflow_fault_is_caught() {
    let subject = Subject {
        reverse: reverse_wrapping,
        ..Subject::default()
    };
    let summary = run(subject, reverse_properties);

    assert!(failed(&summary).contains(&"reverse_stays_in_range"), "{}", summary);
    assert!(summary.report("reverse_handles_negatives").unwrap().is_passed());
    assert!(summary.report("reverse_drops_leading_zeros").unwrap().is_passed());
}

#[test]
fn missing_length_guard_is_caught() {
    let subject = Subject {
        is_isomorphic: isomorphic_unguarded,
        ..Subject::default()
    };
    let summary = run(subject, isomorphism_properties);

    let report = summary.report("different_lengths_never_isomorphic").unwrap();
    assert!(report.counterexample().is_some(), "{}", report);

    // One failing property does not stop the others.
    assert!(summary.report("isomorphism_is_reflexive").unwrap().is_passed());
    assert!(summary.report("isomorphism_is_symmetric").unwrap().is_passed());
}

#[test]
fn one_way_mapping_is_caught() {
    let subject = Subject {
        is_isomorphic: isomorphic_one_way,
        ..Subject::default()
    };
    let summary = run(subject, isomorphism_properties);

    let report = summary.report("isomorphism_is_symmetric_on_small_alphabet").unwrap();
    let cex = report.counterexample().expect("asymmetry must be caught");
    // Shrinks to two characters per side, e.g. ("ab", "aa").
    assert_eq!(cex.minimal.len(), r#"("ab", "aa")"#.len(), "{}", report);
    assert!(summary.report("different_lengths_never_isomorphic").unwrap().is_passed());
    assert!(summary.report("isomorphism_is_reflexive").unwrap().is_passed());
}

#[test]
fn negative_odd_fault_is_caught() {
    let subject = Subject {
        odd_or_pos: odd_or_pos_positive_odd_only,
        ..Subject::default()
    };
    let summary = run(subject, counter_properties);

    let report = summary.report("odd_counted").unwrap();
    let cex = report.counterexample().expect("negative odd values must be caught");
    assert_eq!(cex.minimal, "-1");
    assert_eq!(cex.mismatch.expected, "1");
    assert_eq!(cex.mismatch.actual, "0");

    assert!(failed(&summary).contains(&"count_matches_sign_parity_model"));
    assert!(summary.report("negative_even_not_counted").unwrap().is_passed());
    assert!(summary.report("positive_counted").unwrap().is_passed());
    assert!(summary.report("zeros_not_counted").unwrap().is_passed());
}
