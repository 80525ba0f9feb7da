//! Command implementations: one engine pulse per invocation.

use anyhow::{Context, Result};
use tracing::info;

use facet_engine::{LifecycleController, OptionCatalog, PulseContext, PulseOutcome};
use facet_model::{
    ColumnTypeMap, DataRecord, ExternalFilterState, RawSelection, SelectionCardinality,
};

use crate::cli::{EvaluateArgs, OptionsArgs};
use crate::loader;
use crate::summary::print_options;

pub struct EvaluateReport {
    pub outcome: PulseOutcome,
    /// Rows matching the computed predicate, when `--apply` was requested.
    pub matched: Option<Vec<DataRecord>>,
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<EvaluateReport> {
    let config = loader::load_config(&args.config)?;
    let coltype_map = match &args.coltypes {
        Some(path) => loader::load_coltype_map(path)?,
        None => ColumnTypeMap::new(),
    };
    let rows = loader::load_records(&args.data, &coltype_map)?;
    let external_state = match &args.state {
        Some(text) => {
            let value: serde_json::Value =
                serde_json::from_str(text).context("parse --state JSON")?;
            ExternalFilterState::from_json(&value)
        }
        None => ExternalFilterState::default(),
    };

    let ctx = PulseContext {
        rows: &rows,
        coltype_map: &coltype_map,
        config: &config,
        external_state: &external_state,
        is_disabled: args.disabled,
        is_config_preview: args.preview,
    };
    let mut controller = LifecycleController::new();

    let outcome = if args.clear_all {
        controller.on_clear_all(&ctx)?
    } else if let Some(text) = &args.select {
        let value: serde_json::Value =
            serde_json::from_str(text).context("parse --select JSON")?;
        let raw = raw_selection_from_json(&value, config.cardinality);
        controller.on_user_select(&ctx, &raw)?
    } else {
        controller.on_dataset_changed(&ctx)?
    };
    info!(filter_id = %config.filter_id, rows = rows.len(), "pulse complete");

    let matched = args.apply.then(|| {
        rows.iter()
            .filter(|row| outcome.mask.predicate.matches(row))
            .cloned()
            .collect()
    });
    Ok(EvaluateReport { outcome, matched })
}

pub fn run_options(args: &OptionsArgs) -> Result<()> {
    let config = loader::load_config(&args.config)?;
    let coltype_map = match &args.coltypes {
        Some(path) => loader::load_coltype_map(path)?,
        None => ColumnTypeMap::new(),
    };
    let rows = loader::load_records(&args.data, &coltype_map)?;
    let catalog = OptionCatalog::build(
        &rows,
        &config.column,
        &coltype_map,
        config.sort_ascending,
    );
    print_options(&catalog);
    Ok(())
}

/// A bare JSON boolean addressed at a single-boolean filter is the toggle's
/// presence/absence signal; everything else goes through the generic raw
/// selection shape.
fn raw_selection_from_json(
    value: &serde_json::Value,
    cardinality: SelectionCardinality,
) -> RawSelection {
    if cardinality == SelectionCardinality::SingleBoolean {
        if let serde_json::Value::Bool(checked) = value {
            return RawSelection::Toggle(*checked);
        }
    }
    RawSelection::from_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_model::ScalarValue;

    #[test]
    fn bare_boolean_becomes_a_toggle_only_for_single_boolean() {
        assert_eq!(
            raw_selection_from_json(
                &serde_json::json!(true),
                SelectionCardinality::SingleBoolean
            ),
            RawSelection::Toggle(true)
        );
        assert_eq!(
            raw_selection_from_json(&serde_json::json!(true), SelectionCardinality::Multiple),
            RawSelection::List(vec![ScalarValue::Bool(true)])
        );
    }
}
