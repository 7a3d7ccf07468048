//! Property-based tests for checkthat.

use checkthat::prelude::*;
use proptest::prelude::*;

// Local fixed-length validators, for exercising combinator laws with two
// independent rules over the same input type.
struct MinLen(usize);

impl Validate for MinLen {
    type Input = str;
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.chars().count() >= self.0 {
            Ok(())
        } else {
            Err(ValidationError::failed("min_len", "too short"))
        }
    }
}

struct MaxLen(usize);

impl Validate for MaxLen {
    type Input = str;
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.chars().count() <= self.0 {
            Ok(())
        } else {
            Err(ValidationError::failed("max_len", "too long"))
        }
    }
}

// ============================================================================
// IDEMPOTENCY: validating twice yields the same verdict
// ============================================================================

proptest! {
    #[test]
    fn not_empty_idempotent(s in ".*") {
        let v = not_empty::<str>();
        let r1 = v.validate(&s);
        let r2 = v.validate(&s);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn is_equal_idempotent(a in any::<i64>(), b in any::<i64>()) {
        let v = is_equal::<i64>();
        let r1 = v.validate_against(&a, &b);
        let r2 = v.validate_against(&a, &b);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }
}

// ============================================================================
// PREDICATE AGREEMENT
// ============================================================================

proptest! {
    #[test]
    fn not_empty_agrees_with_str_is_empty(s in ".*") {
        prop_assert_eq!(not_empty().validate(s.as_str()).is_ok(), !s.is_empty());
    }

    #[test]
    fn is_equal_agrees_with_partial_eq(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(is_equal().validate_against(&a, &b).is_ok(), a == b);
    }

    #[test]
    fn greater_than_agrees_with_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(greater_than().validate_against(&a, &b).is_ok(), a > b);
    }

    #[test]
    fn all_absent_slices_are_empty(len in 0usize..16) {
        let slice: Vec<Option<u8>> = vec![None; len];
        prop_assert!(not_empty().validate(slice.as_slice()).is_err());
    }

    #[test]
    fn any_present_element_is_non_empty(
        mut elements in proptest::collection::vec(any::<Option<u8>>(), 1..16),
        index in any::<proptest::sample::Index>(),
    ) {
        let slot = index.index(elements.len());
        elements[slot] = Some(0);
        prop_assert!(not_empty().validate(elements.as_slice()).is_ok());
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = MinLen(3);
        let b = MaxLen(10);
        let combined = MinLen(3).and(MaxLen(10));

        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,20}") {
        let a = MinLen(5);
        let b = MaxLen(3);
        let combined = MinLen(5).or(MaxLen(3));

        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(s in ".{0,20}") {
        let v = MinLen(5);
        let double_neg = MinLen(5).not().not();
        prop_assert_eq!(double_neg.validate(&s).is_ok(), v.validate(&s).is_ok());
    }
}

// ============================================================================
// CHAIN / COMBINATOR EQUIVALENCE
// ============================================================================

proptest! {
    #[test]
    fn chain_and_composed_rule_agree(s in proptest::option::of(".{0,8}")) {
        let chained = check_that(&s)
            .check(&not_null())
            .and_then(|c| c.and(&not_empty()))
            .is_ok();
        let composed = not_null().and(not_empty()).validate(&s).is_ok();
        prop_assert_eq!(chained, composed);
    }
}
