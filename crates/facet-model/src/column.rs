//! Dataset rows and column-type metadata supplied by the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarValue;

/// Coarse column type tags, as reported by the query layer.
///
/// An unknown or missing tag falls back to generic string formatting
/// downstream; it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Numeric,
    Boolean,
    Temporal,
}

/// One dataset row: column name mapped to its cell value.
pub type DataRecord = BTreeMap<String, ScalarValue>;

/// Column name mapped to its type tag.
pub type ColumnTypeMap = BTreeMap<String, ColumnType>;

/// Look up a row's cell, treating an absent column as null.
pub fn record_value<'a>(row: &'a DataRecord, column: &str) -> &'a ScalarValue {
    row.get(column).unwrap_or(&ScalarValue::Null)
}

/// Build a [`ColumnTypeMap`] from positionally paired name/type sequences,
/// the shape in which query responses report column metadata. Extra names
/// without a paired type are dropped.
pub fn coltype_map_from_pairs(colnames: &[String], coltypes: &[ColumnType]) -> ColumnTypeMap {
    colnames
        .iter()
        .zip(coltypes.iter())
        .map(|(name, coltype)| (name.clone(), *coltype))
        .collect()
}
