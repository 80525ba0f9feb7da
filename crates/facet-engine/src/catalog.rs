//! The candidate value domain of a filter, derived from a dataset column.

use std::collections::HashSet;

use facet_model::{ColumnTypeMap, DataRecord, ScalarValue, record_value};

use crate::format::LabelFormatter;

/// One distinct non-null value observed in the column, with its display
/// label. Uniqueness is by raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub raw_value: ScalarValue,
    pub display_label: String,
}

/// Ordered candidate domain for one filter column.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCatalog {
    column: String,
    entries: Vec<OptionEntry>,
    formatter: LabelFormatter,
}

impl OptionCatalog {
    /// Collect the distinct non-null values of `column` across `rows`,
    /// first-observed order. With `sort_ascending` set, entries are ordered
    /// by case-insensitive label comparison instead; `None` preserves the
    /// order induced by the upstream query.
    ///
    /// Pure function of its inputs; produces a fresh catalog each call.
    pub fn build(
        rows: &[DataRecord],
        column: &str,
        coltype_map: &ColumnTypeMap,
        sort_ascending: Option<bool>,
    ) -> Self {
        let formatter = LabelFormatter::for_column(rows, column, coltype_map);
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for row in rows {
            let value = record_value(row, column);
            if value.is_null() || !seen.insert(value.clone()) {
                continue;
            }
            entries.push(OptionEntry {
                raw_value: value.clone(),
                display_label: formatter.format(value),
            });
        }
        if let Some(ascending) = sort_ascending {
            entries.sort_by(|left, right| {
                let left_label = left.display_label.to_lowercase();
                let right_label = right.display_label.to_lowercase();
                if ascending {
                    left_label.cmp(&right_label)
                } else {
                    right_label.cmp(&left_label)
                }
            });
        }
        Self {
            column: column.to_string(),
            entries,
            formatter,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Label for a value, whether or not it is part of the catalog.
    /// Selections can legitimately reference values absent from the current
    /// dataset (stale external state); those fall back to the formatter.
    pub fn label_for(&self, value: &ScalarValue) -> String {
        self.entries
            .iter()
            .find(|entry| &entry.raw_value == value)
            .map(|entry| entry.display_label.clone())
            .unwrap_or_else(|| self.formatter.format(value))
    }
}
