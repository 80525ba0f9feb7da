use thiserror::Error;

use crate::config::SelectionCardinality;

#[derive(Debug, Error)]
pub enum FacetError {
    /// A single-valued cardinality received multiple values. This is a
    /// caller contract violation, not a user-facing condition.
    #[error("{cardinality} selection accepts at most one value, received {count}")]
    InvalidSelection {
        cardinality: SelectionCardinality,
        count: usize,
    },
    #[error("invalid filter configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, FacetError>;
