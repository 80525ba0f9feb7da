//! Raw and canonical selection values.

use crate::scalar::ScalarValue;

/// A selection as the host hands it over, before normalization: possibly
/// heterogeneous, possibly containing nulls or duplicates.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSelection {
    /// Nothing selected.
    Empty,
    /// Values from a control or from stored filter state.
    List(Vec<ScalarValue>),
    /// The presence/absence signal of a single-boolean toggle.
    Toggle(bool),
}

impl RawSelection {
    pub fn scalar(value: impl Into<ScalarValue>) -> Self {
        RawSelection::List(vec![value.into()])
    }

    /// Interpret host-side JSON: `null` means cleared, an array is a value
    /// list, a lone scalar is wrapped. Malformed array members (nested
    /// arrays, objects) are dropped, since they can originate from stale
    /// external state.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawSelection::Empty,
            serde_json::Value::Array(items) => {
                RawSelection::List(items.iter().filter_map(ScalarValue::from_json).collect())
            }
            other => match ScalarValue::from_json(other) {
                Some(scalar) => RawSelection::List(vec![scalar]),
                None => RawSelection::Empty,
            },
        }
    }
}

/// The canonical selection: either cleared, or a non-empty ordered list of
/// scalars with no nulls and no duplicates. Order is preserved as given;
/// it drives label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Cleared,
    Values(Vec<ScalarValue>),
}

impl SelectionValue {
    /// An empty list collapses to the cleared sentinel.
    pub fn from_values(values: Vec<ScalarValue>) -> Self {
        if values.is_empty() {
            SelectionValue::Cleared
        } else {
            SelectionValue::Values(values)
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, SelectionValue::Cleared)
    }

    pub fn values(&self) -> &[ScalarValue] {
        match self {
            SelectionValue::Cleared => &[],
            SelectionValue::Values(values) => values,
        }
    }
}
