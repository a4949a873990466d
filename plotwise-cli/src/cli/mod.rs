//! Command-line orchestration for the plotwise layout calculator.
//!
//! Offers a `survey` command for one pass over a preset layout with fixed
//! empty bounds, and a `sweep` command that re-runs the survey for every
//! missing-building count up to a ceiling.

mod commands;
mod layouts;

pub use commands::{
    Cli, CliError, Command, RunSummary, SurveyCommand, SweepCommand, render_report, run_cli,
};
pub use layouts::{LayoutName, LayoutPreset};
