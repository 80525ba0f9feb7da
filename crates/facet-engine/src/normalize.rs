//! Canonicalization of raw selections.

use std::collections::HashSet;

use facet_model::{
    FacetError, RawSelection, Result, ScalarValue, SelectionCardinality, SelectionValue,
};

/// Convert a raw, possibly heterogeneous selection into the canonical
/// [`SelectionValue`] for the given cardinality.
///
/// - `Single`: at most one value after cleanup; empty input clears.
/// - `Multiple`: list passthrough, dropping nulls; an empty result clears.
/// - `SingleBoolean`: a checked toggle selects the boolean opposite of
///   `boolean_filter_value`; string-encoded booleans carried in prior state
///   are coerced to literals here, before any predicate is built, so that
///   predicate logic never special-cases strings.
///
/// Duplicates are removed (first occurrence wins) before the cardinality
/// check. More than one remaining value under a single-valued cardinality
/// is a caller contract violation and yields
/// [`FacetError::InvalidSelection`].
pub fn normalize_selection(
    raw: &RawSelection,
    cardinality: SelectionCardinality,
    boolean_filter_value: bool,
) -> Result<SelectionValue> {
    let candidates = match raw {
        RawSelection::Empty | RawSelection::Toggle(false) => Vec::new(),
        RawSelection::Toggle(true) => vec![ScalarValue::Bool(!boolean_filter_value)],
        RawSelection::List(values) => values.clone(),
    };

    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for candidate in candidates {
        if candidate.is_null() {
            continue;
        }
        let value = if cardinality == SelectionCardinality::SingleBoolean {
            coerce_boolean_text(candidate)
        } else {
            candidate
        };
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }

    match cardinality {
        SelectionCardinality::Single | SelectionCardinality::SingleBoolean
            if values.len() > 1 =>
        {
            Err(FacetError::InvalidSelection {
                cardinality,
                count: values.len(),
            })
        }
        _ => Ok(SelectionValue::from_values(values)),
    }
}

fn coerce_boolean_text(value: ScalarValue) -> ScalarValue {
    match value {
        ScalarValue::Text(text) if text == "true" => ScalarValue::Bool(true),
        ScalarValue::Text(text) if text == "false" => ScalarValue::Bool(false),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_wraps_a_scalar() {
        let selection = normalize_selection(
            &RawSelection::scalar("active"),
            SelectionCardinality::Single,
            false,
        )
        .expect("normalize");
        assert_eq!(selection.values(), [ScalarValue::from("active")]);
    }

    #[test]
    fn multiple_drops_nulls_and_duplicates() {
        let raw = RawSelection::List(vec![
            ScalarValue::from("a"),
            ScalarValue::Null,
            ScalarValue::from("b"),
            ScalarValue::from("a"),
        ]);
        let selection = normalize_selection(&raw, SelectionCardinality::Multiple, false)
            .expect("normalize");
        assert_eq!(
            selection.values(),
            [ScalarValue::from("a"), ScalarValue::from("b")]
        );
    }

    #[test]
    fn empty_list_yields_the_cleared_sentinel() {
        let selection =
            normalize_selection(&RawSelection::List(Vec::new()), SelectionCardinality::Multiple, false)
                .expect("normalize");
        assert!(selection.is_cleared());
    }

    #[test]
    fn checked_toggle_selects_the_opposite_literal() {
        let selection = normalize_selection(
            &RawSelection::Toggle(true),
            SelectionCardinality::SingleBoolean,
            false,
        )
        .expect("normalize");
        assert_eq!(selection.values(), [ScalarValue::Bool(true)]);

        let unchecked = normalize_selection(
            &RawSelection::Toggle(false),
            SelectionCardinality::SingleBoolean,
            false,
        )
        .expect("normalize");
        assert!(unchecked.is_cleared());
    }

    #[test]
    fn string_booleans_are_coerced_to_literals() {
        let raw = RawSelection::List(vec![ScalarValue::from("true")]);
        let selection =
            normalize_selection(&raw, SelectionCardinality::SingleBoolean, false)
                .expect("normalize");
        assert_eq!(selection.values(), [ScalarValue::Bool(true)]);

        let raw = RawSelection::List(vec![ScalarValue::from("false")]);
        let selection =
            normalize_selection(&raw, SelectionCardinality::SingleBoolean, true)
                .expect("normalize");
        assert_eq!(selection.values(), [ScalarValue::Bool(false)]);
    }

    #[test]
    fn multiple_values_under_single_cardinality_fail() {
        let raw = RawSelection::List(vec![ScalarValue::from("a"), ScalarValue::from("b")]);
        let error = normalize_selection(&raw, SelectionCardinality::Single, false)
            .expect_err("contract violation");
        assert!(matches!(
            error,
            FacetError::InvalidSelection { count: 2, .. }
        ));
    }
}
