//! Human-facing output for the harness commands.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use facet_engine::OptionCatalog;

use crate::commands::EvaluateReport;

pub fn print_report(report: &EvaluateReport, pretty: bool) -> Result<()> {
    let mask = &report.outcome.mask;
    let rendered = if pretty {
        serde_json::to_string_pretty(mask)?
    } else {
        serde_json::to_string(mask)?
    };
    println!("{rendered}");

    if let Some(filter_id) = &report.outcome.clear_completed {
        eprintln!("clear-all completed for filter {filter_id}");
    }
    if let Some(rows) = &report.matched {
        eprintln!("{} row(s) match the predicate", rows.len());
        println!("{}", serde_json::to_string(rows)?);
    }
    Ok(())
}

pub fn print_options(catalog: &OptionCatalog) {
    let mut table = Table::new();
    table.set_header(vec!["Value", "Label"]);
    apply_table_style(&mut table);
    for entry in catalog.entries() {
        table.add_row(vec![
            entry.raw_value.to_string(),
            entry.display_label.clone(),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
