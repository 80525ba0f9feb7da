//! Query predicates and their wire shape.

use serde::{Serialize, Serializer};

use crate::column::{DataRecord, record_value};
use crate::scalar::ScalarValue;

/// The sentinel always-false clause signalling a forced-empty result to the
/// query layer.
pub const ALWAYS_FALSE_CLAUSE: &str = "1 = 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOperator {
    In,
    NotIn,
}

impl MembershipOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            MembershipOperator::In => "IN",
            MembershipOperator::NotIn => "NOT_IN",
        }
    }
}

/// The machine-readable constraint handed to the query layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// No constraint.
    MatchAll,
    /// Forced-empty result (a required selection is missing).
    MatchNone,
    /// Membership or non-membership test over a value set.
    Membership {
        column: String,
        operator: MembershipOperator,
        values: Vec<ScalarValue>,
    },
}

impl Predicate {
    pub fn is_match_all(&self) -> bool {
        matches!(self, Predicate::MatchAll)
    }

    /// Evaluate the predicate against one row. An absent column reads as
    /// null, which is never a member of the value set.
    pub fn matches(&self, row: &DataRecord) -> bool {
        match self {
            Predicate::MatchAll => true,
            Predicate::MatchNone => false,
            Predicate::Membership {
                column,
                operator,
                values,
            } => {
                let member = values.contains(record_value(row, column));
                match operator {
                    MembershipOperator::In => member,
                    MembershipOperator::NotIn => !member,
                }
            }
        }
    }

    /// Serialization contract consumed by the query layer: `{}` for
    /// match-all, a membership clause for value tests, the always-false
    /// sentinel for match-none.
    pub fn to_query_json(&self) -> serde_json::Value {
        match self {
            Predicate::MatchAll => serde_json::json!({}),
            Predicate::MatchNone => serde_json::json!({ "clause": ALWAYS_FALSE_CLAUSE }),
            Predicate::Membership {
                column,
                operator,
                values,
            } => serde_json::json!({
                "column": column,
                "operator": operator.as_str(),
                "values": values,
            }),
        }
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_query_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(column: &str, value: ScalarValue) -> DataRecord {
        DataRecord::from([(column.to_string(), value)])
    }

    #[test]
    fn membership_matches_value_set() {
        let predicate = Predicate::Membership {
            column: "status".to_string(),
            operator: MembershipOperator::In,
            values: vec![ScalarValue::from("active")],
        };
        assert!(predicate.matches(&row("status", ScalarValue::from("active"))));
        assert!(!predicate.matches(&row("status", ScalarValue::from("inactive"))));
        assert!(!predicate.matches(&DataRecord::new()));
    }

    #[test]
    fn not_in_matches_complement() {
        let predicate = Predicate::Membership {
            column: "status".to_string(),
            operator: MembershipOperator::NotIn,
            values: vec![ScalarValue::from("active")],
        };
        assert!(!predicate.matches(&row("status", ScalarValue::from("active"))));
        assert!(predicate.matches(&row("status", ScalarValue::from("inactive"))));
    }

    #[test]
    fn query_json_shapes() {
        assert_eq!(Predicate::MatchAll.to_query_json(), serde_json::json!({}));
        assert_eq!(
            Predicate::MatchNone.to_query_json(),
            serde_json::json!({ "clause": "1 = 0" })
        );
        let membership = Predicate::Membership {
            column: "status".to_string(),
            operator: MembershipOperator::NotIn,
            values: vec![ScalarValue::from("x")],
        };
        assert_eq!(
            membership.to_query_json(),
            serde_json::json!({
                "column": "status",
                "operator": "NOT_IN",
                "values": ["x"],
            })
        );
    }
}
