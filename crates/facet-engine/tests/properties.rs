//! Algebraic properties of the engine core.

use proptest::prelude::*;

use facet_engine::{ContextFlags, OptionCatalog, compute_data_mask, normalize_selection};
use facet_model::{
    ColumnTypeMap, DataRecord, FilterConfiguration, RawSelection, ScalarValue,
    SelectionCardinality, SelectionValue,
};

fn scalar() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        any::<bool>().prop_map(ScalarValue::Bool),
        (-1000i64..1000).prop_map(ScalarValue::from),
        "[a-z]{1,6}".prop_map(ScalarValue::from),
    ]
}

fn rows_for(values: &[ScalarValue]) -> Vec<DataRecord> {
    values
        .iter()
        .map(|value| DataRecord::from([("col".to_string(), value.clone())]))
        .collect()
}

fn config(inverse: bool, empty_filter: bool) -> FilterConfiguration {
    FilterConfiguration::new("prop", "col")
        .with_inverse_selection(inverse)
        .with_empty_filter(empty_filter)
}

proptest! {
    /// Deep-equal inputs yield deep-equal output, on every path.
    #[test]
    fn compute_is_idempotent(
        values in proptest::collection::vec(scalar(), 0..5),
        inverse in any::<bool>(),
        empty_filter in any::<bool>(),
        preview in any::<bool>(),
    ) {
        let config = config(inverse, empty_filter);
        let selection = normalize_selection(
            &RawSelection::List(values.clone()),
            SelectionCardinality::Multiple,
            false,
        ).expect("multiple cardinality never fails");
        let catalog = OptionCatalog::build(&rows_for(&values), "col", &ColumnTypeMap::new(), None);
        let flags = ContextFlags { is_config_preview: preview, exclude_filter_values: true };

        let first = compute_data_mask(&selection, &config, &catalog, &flags);
        let second = compute_data_mask(&selection, &config, &catalog, &flags);
        prop_assert_eq!(first, second);
    }

    /// The predicate matches exactly the member rows, or exactly the
    /// complement under inverse selection.
    #[test]
    fn membership_is_exact(
        row_values in proptest::collection::vec(scalar(), 1..8),
        selected in proptest::collection::vec(scalar(), 1..4),
        inverse in any::<bool>(),
    ) {
        let selection = normalize_selection(
            &RawSelection::List(selected),
            SelectionCardinality::Multiple,
            false,
        ).expect("normalize");
        prop_assume!(!selection.is_cleared());

        let rows = rows_for(&row_values);
        let catalog = OptionCatalog::build(&rows, "col", &ColumnTypeMap::new(), None);
        let mask = compute_data_mask(
            &selection,
            &config(inverse, false),
            &catalog,
            &ContextFlags::default(),
        );

        for (row, value) in rows.iter().zip(row_values.iter()) {
            let member = selection.values().contains(value);
            let expected = if inverse { !member } else { member };
            prop_assert_eq!(mask.predicate.matches(row), expected);
        }
    }

    /// A cleared selection never constrains rows unless the empty filter
    /// forces a match-none predicate.
    #[test]
    fn cleared_selection_is_all_or_nothing(
        row_values in proptest::collection::vec(scalar(), 0..6),
        inverse in any::<bool>(),
        empty_filter in any::<bool>(),
    ) {
        let rows = rows_for(&row_values);
        let catalog = OptionCatalog::build(&rows, "col", &ColumnTypeMap::new(), None);
        let mask = compute_data_mask(
            &SelectionValue::Cleared,
            &config(inverse, empty_filter),
            &catalog,
            &ContextFlags::default(),
        );
        let forced_empty = empty_filter && !inverse;
        for row in &rows {
            prop_assert_eq!(mask.predicate.matches(row), !forced_empty);
        }
        prop_assert_eq!(mask.filter_state.label, None);
    }

    /// String-encoded booleans become literals before predicate
    /// construction.
    #[test]
    fn boolean_text_always_normalizes_to_literals(flag in any::<bool>()) {
        let text = if flag { "true" } else { "false" };
        let selection = normalize_selection(
            &RawSelection::List(vec![ScalarValue::from(text)]),
            SelectionCardinality::SingleBoolean,
            false,
        ).expect("normalize");
        prop_assert_eq!(selection.values(), [ScalarValue::Bool(flag)]);
    }

    /// Labels follow selection order, not catalog order.
    #[test]
    fn label_order_follows_selection_order(
        labels in proptest::collection::btree_set("[a-z]{2,6}", 2..5),
    ) {
        let values: Vec<ScalarValue> = labels
            .iter()
            .map(|text| ScalarValue::from(text.clone()))
            .collect();
        let rows = rows_for(&values);
        let catalog = OptionCatalog::build(&rows, "col", &ColumnTypeMap::new(), Some(true));

        let mut reversed = values.clone();
        reversed.reverse();
        let selection = SelectionValue::Values(reversed.clone());
        let mask = compute_data_mask(
            &selection,
            &config(false, false),
            &catalog,
            &ContextFlags::default(),
        );

        let expected = reversed
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(mask.filter_state.label, Some(expected));
    }
}
