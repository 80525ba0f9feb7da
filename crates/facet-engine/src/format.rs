//! Column-type-aware display labels.
//!
//! Temporal values are rendered at the finest grain observed in the dataset
//! column, so a column of midnight-aligned timestamps reads as dates while
//! one with intraday times keeps its clock component.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use facet_model::{ColumnType, ColumnTypeMap, DataRecord, ScalarValue, record_value};

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";
pub const EXCLUDED_SUFFIX: &str = " (excluded)";
pub const NULL_DISPLAY: &str = "N/A";

/// Display string for a boolean literal.
pub fn bool_label(value: bool) -> &'static str {
    if value { TRUE_LABEL } else { FALSE_LABEL }
}

/// Temporal rendering grain, coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemporalGrain {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TemporalGrain {
    fn pattern(self) -> &'static str {
        match self {
            TemporalGrain::Year => "%Y",
            TemporalGrain::Month => "%Y-%m",
            TemporalGrain::Day => "%Y-%m-%d",
            TemporalGrain::Hour => "%Y-%m-%d %H:00",
            TemporalGrain::Minute => "%Y-%m-%d %H:%M",
            TemporalGrain::Second => "%Y-%m-%d %H:%M:%S",
        }
    }
}

/// Parse a temporal cell: epoch milliseconds or ISO-8601 text.
pub fn parse_temporal(value: &ScalarValue) -> Option<NaiveDateTime> {
    match value {
        ScalarValue::Number(millis) => {
            DateTime::from_timestamp_millis(*millis as i64).map(|dt| dt.naive_utc())
        }
        ScalarValue::Text(text) => parse_temporal_text(text),
        _ => None,
    }
}

fn parse_temporal_text(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// The finest grain a single timestamp carries information at.
fn grain_of(timestamp: NaiveDateTime) -> TemporalGrain {
    if timestamp.second() != 0 || timestamp.nanosecond() != 0 {
        TemporalGrain::Second
    } else if timestamp.minute() != 0 {
        TemporalGrain::Minute
    } else if timestamp.hour() != 0 {
        TemporalGrain::Hour
    } else if timestamp.day() != 1 {
        TemporalGrain::Day
    } else if timestamp.month() != 1 {
        TemporalGrain::Month
    } else {
        TemporalGrain::Year
    }
}

/// Formats cell values for one dataset column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormatter {
    column_type: ColumnType,
    grain: TemporalGrain,
}

impl LabelFormatter {
    /// Build a formatter for `column`, detecting the finest temporal grain
    /// observed across the dataset when the column is temporal. An unknown
    /// column type falls back to generic string formatting.
    pub fn for_column(rows: &[DataRecord], column: &str, coltype_map: &ColumnTypeMap) -> Self {
        let column_type = coltype_map.get(column).copied().unwrap_or_default();
        let grain = if column_type == ColumnType::Temporal {
            rows.iter()
                .filter_map(|row| parse_temporal(record_value(row, column)))
                .map(grain_of)
                .max()
                .unwrap_or(TemporalGrain::Day)
        } else {
            TemporalGrain::Day
        };
        Self { column_type, grain }
    }

    pub fn format(&self, value: &ScalarValue) -> String {
        match value {
            ScalarValue::Null => NULL_DISPLAY.to_string(),
            ScalarValue::Bool(flag) => bool_label(*flag).to_string(),
            other => {
                if self.column_type == ColumnType::Temporal {
                    if let Some(timestamp) = parse_temporal(other) {
                        return timestamp.format(self.grain.pattern()).to_string();
                    }
                }
                other.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temporal_rows(cells: &[&str]) -> Vec<DataRecord> {
        cells
            .iter()
            .map(|cell| DataRecord::from([("ts".to_string(), ScalarValue::from(*cell))]))
            .collect()
    }

    fn temporal_map() -> ColumnTypeMap {
        BTreeMap::from([("ts".to_string(), ColumnType::Temporal)])
    }

    #[test]
    fn midnight_aligned_column_renders_as_dates() {
        let rows = temporal_rows(&["2024-03-01 00:00:00", "2024-03-15 00:00:00"]);
        let formatter = LabelFormatter::for_column(&rows, "ts", &temporal_map());
        assert_eq!(
            formatter.format(&ScalarValue::from("2024-03-15 00:00:00")),
            "2024-03-15"
        );
    }

    #[test]
    fn one_intraday_value_pushes_the_whole_column_to_minutes() {
        let rows = temporal_rows(&["2024-03-01 00:00:00", "2024-03-15 10:30:00"]);
        let formatter = LabelFormatter::for_column(&rows, "ts", &temporal_map());
        assert_eq!(
            formatter.format(&ScalarValue::from("2024-03-01 00:00:00")),
            "2024-03-01 00:00"
        );
    }

    #[test]
    fn epoch_millis_parse_as_temporal() {
        // 2021-01-01T00:00:00Z
        let parsed = parse_temporal(&ScalarValue::Number(1_609_459_200_000.0));
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2021, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn unknown_column_type_formats_as_text() {
        let formatter = LabelFormatter::for_column(&[], "other", &ColumnTypeMap::new());
        assert_eq!(formatter.format(&ScalarValue::Number(7.0)), "7");
        assert_eq!(formatter.format(&ScalarValue::Null), NULL_DISPLAY);
        assert_eq!(formatter.format(&ScalarValue::Bool(true)), TRUE_LABEL);
    }
}
