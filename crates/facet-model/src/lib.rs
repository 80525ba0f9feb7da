pub mod column;
pub mod config;
pub mod error;
pub mod predicate;
pub mod scalar;
pub mod selection;
pub mod state;

pub use column::{ColumnType, ColumnTypeMap, DataRecord, coltype_map_from_pairs, record_value};
pub use config::{FilterConfiguration, SelectionCardinality};
pub use error::{FacetError, Result};
pub use predicate::{ALWAYS_FALSE_CLAUSE, MembershipOperator, Predicate};
pub use scalar::{ScalarValue, format_numeric};
pub use selection::{RawSelection, SelectionValue};
pub use state::{DataMaskResult, ExternalFilterState, FilterState, StoredValue};
