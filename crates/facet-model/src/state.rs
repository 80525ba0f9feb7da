//! Filter-state summaries and the data-mask result delivered to the host.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::predicate::Predicate;
use crate::scalar::ScalarValue;
use crate::selection::RawSelection;

/// The stored value echoed back in filter state.
///
/// Three states: `Unset` is the "not yet decided" marker (used when a
/// configuration preview suppresses the computed selection), `Cleared` is
/// the explicit no-selection sentinel, `Selected` carries committed values.
/// On the wire `Unset` is an absent field while `Cleared` is JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    Unset,
    Cleared,
    Selected(Vec<ScalarValue>),
}

impl StoredValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, StoredValue::Unset)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, StoredValue::Cleared)
    }
}

impl Serialize for StoredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset is normally skipped at the field level; if serialized
            // directly it degrades to null like Cleared.
            StoredValue::Unset | StoredValue::Cleared => serializer.serialize_none(),
            StoredValue::Selected(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

/// Human-facing summary of the current filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    #[serde(skip_serializing_if = "StoredValue::is_unset")]
    pub value: StoredValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub exclude_filter_values: bool,
}

/// Host-managed filter state fed into a pulse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalFilterState {
    /// `None` means the host has no committed value; `Some(Empty)` is an
    /// explicit cleared value and is adopted as such.
    pub value: Option<RawSelection>,
    /// Inherited from prior filter state; defaults to true when absent.
    pub exclude_filter_values: Option<bool>,
}

impl ExternalFilterState {
    pub fn with_value(raw: RawSelection) -> Self {
        Self {
            value: Some(raw),
            exclude_filter_values: None,
        }
    }

    /// Interpret the host's JSON shape: an absent `value` field means no
    /// committed value, an explicit `null` means cleared.
    pub fn from_json(state: &serde_json::Value) -> Self {
        let Some(object) = state.as_object() else {
            return Self::default();
        };
        Self {
            value: object.get("value").map(RawSelection::from_json),
            exclude_filter_values: object
                .get("exclude_filter_values")
                .and_then(serde_json::Value::as_bool),
        }
    }
}

/// The per-pulse output: a query predicate plus the filter-state summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataMaskResult {
    pub predicate: Predicate,
    pub filter_state: FilterState,
}
