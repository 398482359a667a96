//! Property-based tests for class-number matching

use modpocket::catalog::class_numbers_match;
use proptest::prelude::*;

/// Zero padding never changes whether two class numbers match
#[test]
fn test_zero_padding_is_ignored() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0u32..10_000, 0usize..4), |(n, pad)| {
            let padded = format!("{}{}", "0".repeat(pad), n);
            prop_assert!(class_numbers_match(&padded, &n.to_string()));
            prop_assert!(class_numbers_match(&n.to_string(), &padded));
            Ok(())
        })
        .unwrap();
}

/// Distinct integers never match
#[test]
fn test_distinct_numbers_never_match() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0u32..10_000, 0u32..10_000), |(a, b)| {
            prop_assume!(a != b);
            prop_assert!(!class_numbers_match(&a.to_string(), &b.to_string()));
            Ok(())
        })
        .unwrap();
}

/// Non-numeric labels match only themselves
#[test]
fn test_labels_match_exactly() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[A-Z][0-9]{1,2}", "[A-Z][0-9]{1,2}"), |(a, b)| {
            prop_assert_eq!(class_numbers_match(&a, &b), a == b);
            Ok(())
        })
        .unwrap();
}
