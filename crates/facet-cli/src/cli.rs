//! CLI argument definitions for the facet harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "facet",
    version,
    about = "Dashboard filter engine harness - compute query predicates and filter summaries",
    long_about = "Drive one pulse of the facet filter engine against a dataset.\n\n\
                  Reads a filter configuration and a dataset (CSV or JSON rows), applies\n\
                  the initialization/clear-all lifecycle, and prints the resulting query\n\
                  predicate and filter-state summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one filter pulse and print the resulting data mask.
    Evaluate(EvaluateArgs),

    /// List the option catalog derived from the configured column.
    Options(OptionsArgs),
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Path to the filter configuration JSON.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Path to the dataset: a .csv file or a JSON array of row objects.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Path to a column-type map JSON, e.g. {"ts": "temporal"}.
    #[arg(long = "coltypes", value_name = "PATH")]
    pub coltypes: Option<PathBuf>,

    /// Committed filter state JSON, e.g. '{"value": ["active"]}'.
    #[arg(long = "state", value_name = "JSON")]
    pub state: Option<String>,

    /// Simulate a user selection, e.g. '["active"]', or 'true'/'false' for
    /// a single-boolean toggle.
    #[arg(long = "select", value_name = "JSON", conflicts_with = "clear_all")]
    pub select: Option<String>,

    /// Fire the dashboard-wide clear-all signal.
    #[arg(long = "clear-all")]
    pub clear_all: bool,

    /// Evaluate with the filter disabled.
    #[arg(long = "disabled")]
    pub disabled: bool,

    /// Evaluate in the configuration-preview context.
    #[arg(long = "preview")]
    pub preview: bool,

    /// Pretty-print the resulting JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Also print the dataset rows matching the predicate.
    #[arg(long = "apply")]
    pub apply: bool,
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// Path to the filter configuration JSON.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Path to the dataset: a .csv file or a JSON array of row objects.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Path to a column-type map JSON.
    #[arg(long = "coltypes", value_name = "PATH")]
    pub coltypes: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
