//! Initialization/clear-all lifecycle control.
//!
//! The controller decides, on every host pulse, which selection is applied
//! through the data-mask computation, following a fixed priority:
//!
//! 1. clear-all signal
//! 2. filter disabled
//! 3. explicit external value
//! 4. single-boolean with no value, first cycle
//! 5. default-to-first-item, first cycle
//! 6. static configured default, first cycle
//! 7. cleared
//!
//! Steps 4–6 run only while the filter is not yet initialized for the
//! current enablement cycle; once a value has been applied, unrelated
//! re-renders must not overwrite user edits with defaults.

use tracing::debug;

use facet_model::{
    ColumnTypeMap, DataMaskResult, DataRecord, ExternalFilterState, FilterConfiguration,
    RawSelection, Result, SelectionCardinality, SelectionValue, record_value,
};

use crate::catalog::OptionCatalog;
use crate::mask::{ContextFlags, compute_data_mask};
use crate::normalize::normalize_selection;

/// Lifecycle phase of one filter instance. Owned exclusively by its
/// controller; never shared across filter instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Uninitialized,
    Initialized,
    Disabled,
}

/// Everything the host supplies for one pulse. Configuration and dataset
/// are fresh on every call; the controller holds no copy of either.
#[derive(Debug, Clone, Copy)]
pub struct PulseContext<'a> {
    pub rows: &'a [DataRecord],
    pub coltype_map: &'a ColumnTypeMap,
    pub config: &'a FilterConfiguration,
    pub external_state: &'a ExternalFilterState,
    pub is_disabled: bool,
    pub is_config_preview: bool,
}

/// One result per pulse. `clear_completed` carries the filter id exactly
/// once per clear-all signal; the host forwards it to its clear-completion
/// hook.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseOutcome {
    pub mask: DataMaskResult,
    pub clear_completed: Option<String>,
}

impl PulseOutcome {
    fn of(mask: DataMaskResult) -> Self {
        Self {
            mask,
            clear_completed: None,
        }
    }
}

/// Per-filter-instance lifecycle state machine.
#[derive(Debug, Default)]
pub struct LifecycleController {
    phase: LifecyclePhase,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The backing query delivered fresh rows.
    pub fn on_dataset_changed(&mut self, ctx: &PulseContext<'_>) -> Result<PulseOutcome> {
        self.auto_pulse(ctx)
    }

    /// The saved filter settings changed (or the filter was just mounted).
    pub fn on_config_changed(&mut self, ctx: &PulseContext<'_>) -> Result<PulseOutcome> {
        self.auto_pulse(ctx)
    }

    /// Dashboard-wide clear-all. Cancels any pending default-application
    /// intent and resets the lifecycle, so the next automatic pulse re-runs
    /// default logic from scratch.
    pub fn on_clear_all(&mut self, ctx: &PulseContext<'_>) -> Result<PulseOutcome> {
        debug!(filter_id = %ctx.config.filter_id, "clear-all signal, resetting filter");
        let mask = self.apply(ctx, &SelectionValue::Cleared);
        self.phase = LifecyclePhase::Uninitialized;
        Ok(PulseOutcome {
            mask,
            clear_completed: Some(ctx.config.filter_id.clone()),
        })
    }

    /// Direct user interaction. Always applies the selection and marks the
    /// filter initialized; the automatic default rules do not apply here.
    pub fn on_user_select(
        &mut self,
        ctx: &PulseContext<'_>,
        raw: &RawSelection,
    ) -> Result<PulseOutcome> {
        let selection =
            normalize_selection(raw, ctx.config.cardinality, ctx.config.boolean_filter_value)?;
        debug!(filter_id = %ctx.config.filter_id, cleared = selection.is_cleared(), "user selection");
        let mask = self.apply(ctx, &selection);
        self.phase = LifecyclePhase::Initialized;
        Ok(PulseOutcome::of(mask))
    }

    /// Priority chain for automatic pulses (steps 2–7; clear-all has its
    /// own entry point above).
    fn auto_pulse(&mut self, ctx: &PulseContext<'_>) -> Result<PulseOutcome> {
        let config = ctx.config;

        if ctx.is_disabled {
            // Not marked initialized, so re-enabling re-runs default logic.
            debug!(filter_id = %config.filter_id, "filter disabled, applying cleared selection");
            let mask = self.apply(ctx, &SelectionValue::Cleared);
            self.phase = LifecyclePhase::Disabled;
            return Ok(PulseOutcome::of(mask));
        }
        if self.phase == LifecyclePhase::Disabled {
            self.phase = LifecyclePhase::Uninitialized;
        }

        if let Some(raw) = ctx.external_state.value.as_ref() {
            let selection =
                normalize_selection(raw, config.cardinality, config.boolean_filter_value)?;
            debug!(filter_id = %config.filter_id, "adopting external filter value");
            let mask = self.apply(ctx, &selection);
            self.phase = LifecyclePhase::Initialized;
            return Ok(PulseOutcome::of(mask));
        }

        let first_cycle = self.phase != LifecyclePhase::Initialized;

        if first_cycle && config.cardinality == SelectionCardinality::SingleBoolean {
            // An untouched toggle shows all rows.
            debug!(filter_id = %config.filter_id, "single-boolean default: show all");
            let mask = self.apply(ctx, &SelectionValue::Cleared);
            self.phase = LifecyclePhase::Initialized;
            return Ok(PulseOutcome::of(mask));
        }

        if first_cycle && config.default_to_first_item {
            if let Some(first_row) = ctx.rows.first() {
                let first_value = record_value(first_row, &config.column);
                if !first_value.is_null() {
                    let raw = RawSelection::List(vec![first_value.clone()]);
                    let selection = normalize_selection(
                        &raw,
                        config.cardinality,
                        config.boolean_filter_value,
                    )?;
                    debug!(filter_id = %config.filter_id, "defaulting to first dataset item");
                    let mask = self.apply(ctx, &selection);
                    self.phase = LifecyclePhase::Initialized;
                    return Ok(PulseOutcome::of(mask));
                }
            }
            // Empty dataset or null first value: fall through to the next
            // rule.
        }

        if first_cycle {
            if let Some(default) = config.default_value.as_ref() {
                let raw = RawSelection::List(default.clone());
                let selection =
                    normalize_selection(&raw, config.cardinality, config.boolean_filter_value)?;
                debug!(filter_id = %config.filter_id, "applying configured default value");
                let mask = self.apply(ctx, &selection);
                self.phase = LifecyclePhase::Initialized;
                return Ok(PulseOutcome::of(mask));
            }
        }

        let mask = self.apply(ctx, &SelectionValue::Cleared);
        self.phase = LifecyclePhase::Initialized;
        Ok(PulseOutcome::of(mask))
    }

    fn apply(&self, ctx: &PulseContext<'_>, selection: &SelectionValue) -> DataMaskResult {
        let catalog = OptionCatalog::build(
            ctx.rows,
            &ctx.config.column,
            ctx.coltype_map,
            ctx.config.sort_ascending,
        );
        let flags = ContextFlags {
            is_config_preview: ctx.is_config_preview,
            exclude_filter_values: ctx.external_state.exclude_filter_values.unwrap_or(true),
        };
        compute_data_mask(selection, ctx.config, &catalog, &flags)
    }
}
