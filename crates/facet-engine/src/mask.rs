//! The data-mask computation: canonical selection + configuration →
//! query predicate + filter-state summary.

use facet_model::{
    DataMaskResult, FilterConfiguration, FilterState, MembershipOperator, Predicate, ScalarValue,
    SelectionCardinality, SelectionValue, StoredValue,
};

use crate::catalog::OptionCatalog;
use crate::format::{EXCLUDED_SUFFIX, bool_label};

/// Host-side context for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextFlags {
    /// The filter is rendered inside its own settings editor rather than
    /// live on a dashboard.
    pub is_config_preview: bool,
    /// Inherited from prior filter state; true unless the host says
    /// otherwise.
    pub exclude_filter_values: bool,
}

impl Default for ContextFlags {
    fn default() -> Self {
        Self {
            is_config_preview: false,
            exclude_filter_values: true,
        }
    }
}

/// Compute the data mask for a canonical selection.
///
/// Deterministic and referentially stable: deep-equal inputs produce
/// deep-equal output, since the host treats any change in output identity
/// as "re-run downstream query".
pub fn compute_data_mask(
    selection: &SelectionValue,
    config: &FilterConfiguration,
    catalog: &OptionCatalog,
    flags: &ContextFlags,
) -> DataMaskResult {
    let exclude_filter_values = flags.exclude_filter_values;

    if selection.is_cleared() {
        // Unchecking a single-boolean toggle must show all rows, not rows
        // matching neither boolean; the empty-filter rule does not apply to
        // that mode.
        let predicate = if config.cardinality == SelectionCardinality::SingleBoolean {
            Predicate::MatchAll
        } else if config.enable_empty_filter && !config.inverse_selection {
            Predicate::MatchNone
        } else {
            Predicate::MatchAll
        };
        let result = DataMaskResult {
            predicate,
            filter_state: FilterState {
                value: echoed_value(StoredValue::Cleared, config, flags),
                label: None,
                exclude_filter_values,
            },
        };
        tracing::trace!(filter_id = %config.filter_id, "computed cleared data mask");
        return result;
    }

    let values = selection.values().to_vec();
    // Inversion reaches the predicate's exclusion framing only when the
    // host still treats filter values as exclusions.
    let operator = if exclude_filter_values && config.inverse_selection {
        MembershipOperator::NotIn
    } else {
        MembershipOperator::In
    };
    let predicate = Predicate::Membership {
        column: config.column.clone(),
        operator,
        values: values.clone(),
    };

    // Labels follow selection order, not catalog order.
    let mut label = values
        .iter()
        .map(|value| value_label(value, config, catalog))
        .collect::<Vec<_>>()
        .join(", ");
    if config.inverse_selection {
        label.push_str(EXCLUDED_SUFFIX);
    }

    let result = DataMaskResult {
        predicate,
        filter_state: FilterState {
            value: echoed_value(StoredValue::Selected(values), config, flags),
            label: Some(label),
            exclude_filter_values,
        },
    };
    tracing::trace!(filter_id = %config.filter_id, predicate = ?result.predicate, "computed data mask");
    result
}

fn value_label(value: &ScalarValue, config: &FilterConfiguration, catalog: &OptionCatalog) -> String {
    if config.cardinality == SelectionCardinality::SingleBoolean {
        if let ScalarValue::Bool(flag) = value {
            return bool_label(*flag).to_string();
        }
    }
    catalog.label_for(value)
}

/// A configuration-time preview must not look like a committed user choice:
/// with default-to-first-item active, the echoed value is suppressed to the
/// not-yet-decided marker.
fn echoed_value(base: StoredValue, config: &FilterConfiguration, flags: &ContextFlags) -> StoredValue {
    if flags.is_config_preview && config.default_to_first_item {
        StoredValue::Unset
    } else {
        base
    }
}
