//! Integration tests for the built-in validator catalog.

use checkthat::prelude::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// NOT NULL
// ============================================================================

#[test]
fn not_null_passes_on_present() {
    assert!(not_null().validate(&Some(42)).is_ok());
}

#[test]
fn not_null_fails_on_absent() {
    let err = not_null().validate(&None::<i32>).unwrap_err();
    assert!(err.is_validation_failed());
    assert_eq!(err.code.as_ref(), "not_null");
}

// ============================================================================
// NOT EMPTY
// ============================================================================

#[rstest]
#[case("test", true)]
#[case("a", true)]
#[case("", false)]
fn not_empty_on_text(#[case] input: &str, #[case] expected_ok: bool) {
    assert_eq!(not_empty().validate(input).is_ok(), expected_ok);
}

#[test]
fn not_empty_on_collections() {
    assert!(not_empty().validate(&vec!["x"]).is_ok());
    assert!(not_empty().validate(&Vec::<&str>::new()).is_err());

    let filled = std::collections::HashSet::from(["x"]);
    assert!(not_empty().validate(&filled).is_ok());
    let drained = std::collections::HashSet::<&str>::new();
    assert!(not_empty().validate(&drained).is_err());
}

#[test]
fn not_empty_zero_length_array_mentions_the_array() {
    let empty: [Option<&str>; 0] = [];
    let err = not_empty().validate(&empty).unwrap_err();
    assert!(err.is_validation_failed());
    assert_eq!(
        err.message.as_ref(),
        "Empty array found when expecting: non-empty array."
    );
}

#[test]
fn not_empty_all_absent_array_counts_as_empty() {
    let all_absent: [Option<i32>; 4] = [None, None, None, None];
    assert!(not_empty().validate(&all_absent).is_err());
}

#[test]
fn not_empty_one_present_element_rescues_the_array() {
    assert!(not_empty().validate(&[None, Some(1), None]).is_ok());
}

#[test]
fn not_empty_absent_subject_is_misuse_not_failure() {
    let err = not_empty().validate(&None::<String>).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

// ============================================================================
// EQUALS
// ============================================================================

#[rstest]
#[case(1, 1, true)]
#[case(1, 2, false)]
#[case(0, -1, false)]
fn is_equal_on_integers(#[case] subject: i32, #[case] against: i32, #[case] expected_ok: bool) {
    let outcome = check_that(&subject).against(&against).check(&is_equal());
    assert_eq!(outcome.is_ok(), expected_ok);
}

#[test]
fn is_equal_reports_both_sides() {
    let err = is_equal().validate_against(&1, &2).unwrap_err();
    assert_eq!(err.message.as_ref(), "1 is not equal to 2");
}

// ============================================================================
// GREATER THAN
// ============================================================================

#[rstest]
#[case(10, 5, true)]
#[case(5, 5, false)]
#[case(5, 10, false)]
fn greater_than_is_strict(#[case] subject: i32, #[case] against: i32, #[case] expected_ok: bool) {
    let outcome = check_that(&subject).against(&against).check(&greater_than());
    assert_eq!(outcome.is_ok(), expected_ok);
}

#[test]
fn equal_dates_are_not_greater() {
    let date_a = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let date_b = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let err = check_that(&date_a)
        .against(&date_b)
        .check(&greater_than())
        .unwrap_err();
    assert!(err.is_validation_failed());
    assert_eq!(err.message.as_ref(), "2024-06-01 is not greater than 2024-06-01");
}

#[test]
fn later_date_is_greater() {
    let later = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    let earlier = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert!(check_that(&later).against(&earlier).check(&greater_than()).is_ok());
}

// ============================================================================
// NOT NULL AND EQUAL (COMPOUND)
// ============================================================================

#[test]
fn compound_checks_not_null_first() {
    let err = not_null_and_equal()
        .validate_against(&None::<&str>, &"x")
        .unwrap_err();
    assert_eq!(err.code.as_ref(), "not_null");
}

#[test]
fn compound_checks_equality_second() {
    let err = not_null_and_equal()
        .validate_against(&Some("x"), &"y")
        .unwrap_err();
    assert_eq!(err.code.as_ref(), "equals");
}

#[test]
fn compound_passes_and_reports_true() {
    let confirmed = not_null_and_equal()
        .validate_against(&Some("x"), &"x")
        .unwrap();
    assert!(confirmed);
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn composed_rule_behaves_like_the_chain() {
    let rule = not_null().and(not_empty());
    assert!(rule.validate(&Some("hello")).is_ok());
    assert!(rule.validate(&None::<&str>).is_err());
    assert!(rule.validate(&Some("")).is_err());
}

#[test]
fn or_rescues_and_not_inverts() {
    let empty_or_not = not_empty::<str>().or(not_empty().not());
    // Tautology: one branch always passes.
    assert!(empty_or_not.validate("x").is_ok());
    assert!(empty_or_not.validate("").is_ok());
}

#[test]
fn and_all_over_a_homogeneous_list() {
    let rule = and_all(vec![not_empty::<str>(), not_empty()]);
    assert!(rule.validate("x").is_ok());
    assert!(rule.validate("").is_err());
}
