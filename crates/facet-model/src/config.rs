//! Filter configuration, read-only to the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FacetError, Result};
use crate::scalar::ScalarValue;

/// How many values a filter control accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionCardinality {
    /// One value at a time (radio group).
    Single,
    /// Any number of values (checkbox group).
    #[default]
    Multiple,
    /// A single on/off toggle over a boolean column.
    SingleBoolean,
}

impl fmt::Display for SelectionCardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionCardinality::Single => "single",
            SelectionCardinality::Multiple => "multiple",
            SelectionCardinality::SingleBoolean => "single-boolean",
        };
        f.write_str(name)
    }
}

/// Saved filter settings, immutable per evaluation.
///
/// Deserialization merges host-supplied fields over the defaults below, so
/// the default merge happens exactly once per filter instantiation rather
/// than on every pulse. Call [`FilterConfiguration::validate`] after
/// construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfiguration {
    /// Host-assigned filter instance id, echoed on clear-all completion.
    pub filter_id: String,
    /// The dataset column this filter constrains.
    pub column: String,
    pub cardinality: SelectionCardinality,
    /// When set (and the selection is not inverted), a cleared selection
    /// forces a match-none predicate so the host can demand a value.
    pub enable_empty_filter: bool,
    /// Selected values exclude rows instead of including them.
    pub inverse_selection: bool,
    /// Seed the selection from the first dataset row when nothing else
    /// supplies a value.
    pub default_to_first_item: bool,
    /// Tri-state: `Some(true)` ascending, `Some(false)` descending, `None`
    /// keeps the upstream query order.
    pub sort_ascending: Option<bool>,
    /// Metric used for upstream ordering. Carried for the query layer;
    /// never applied locally.
    pub sort_metric: Option<String>,
    /// Static default selection, lowest-priority initialization source.
    pub default_value: Option<Vec<ScalarValue>>,
    /// For single-boolean mode: which boolean the unchecked state stands
    /// for. A checked box selects the opposite literal.
    pub boolean_filter_value: bool,
    /// Display the filter's own name on the single-boolean toggle instead
    /// of the True/False literal.
    pub use_filter_name_as_label: bool,
    pub filter_name: Option<String>,
}

impl FilterConfiguration {
    pub fn new(filter_id: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            filter_id: filter_id.into(),
            column: column.into(),
            ..Self::default()
        }
    }

    pub fn with_cardinality(mut self, cardinality: SelectionCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_inverse_selection(mut self, enable: bool) -> Self {
        self.inverse_selection = enable;
        self
    }

    pub fn with_empty_filter(mut self, enable: bool) -> Self {
        self.enable_empty_filter = enable;
        self
    }

    pub fn with_default_to_first_item(mut self, enable: bool) -> Self {
        self.default_to_first_item = enable;
        self
    }

    pub fn with_default_value(mut self, values: Vec<ScalarValue>) -> Self {
        self.default_value = Some(values);
        self
    }

    /// The display name for the single-boolean checked state.
    pub fn toggle_label(&self) -> Option<&str> {
        if self.use_filter_name_as_label {
            self.filter_name.as_deref()
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.filter_id.trim().is_empty() {
            return Err(FacetError::InvalidConfiguration(
                "filter_id must not be empty".to_string(),
            ));
        }
        if self.column.trim().is_empty() {
            return Err(FacetError::InvalidConfiguration(
                "column must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
