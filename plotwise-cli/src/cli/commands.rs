//! Command implementations and argument parsing for the plotwise CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use plotwise_core::{BuildingCounts, CityError, Snapshot, SurveyError, SurveyReport, survey};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::layouts::LayoutName;

const DEFAULT_SWEEP_CEILING: usize = 9;

/// Top-level CLI options parsed by [`clap`].
#[derive(Clone, Debug, Parser)]
#[command(name = "plotwise", about = "Search for the best city layout by brute force.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Survey every assignment once with fixed empty bounds.
    Survey(SurveyCommand),
    /// Re-run the survey with min = max = k for each k up to a ceiling.
    Sweep(SweepCommand),
}

/// Options accepted by the `survey` command.
#[derive(Args, Clone, Debug)]
pub struct SurveyCommand {
    /// Layout to survey.
    #[arg(long, value_enum)]
    pub layout: LayoutName,

    /// Minimum number of plots that must stay empty.
    #[arg(long = "min-empty", default_value_t = 0)]
    pub min_empty: usize,

    /// Maximum number of plots allowed to stay empty.
    #[arg(long = "max-empty", default_value_t = 0)]
    pub max_empty: usize,
}

/// Options accepted by the `sweep` command.
#[derive(Args, Clone, Debug)]
pub struct SweepCommand {
    /// Layout to survey.
    #[arg(long, value_enum)]
    pub layout: LayoutName,

    /// Highest missing-building count to survey (inclusive).
    #[arg(long = "max-missing", default_value_t = DEFAULT_SWEEP_CEILING)]
    pub max_missing: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// City construction failed.
    #[error(transparent)]
    City(#[from] CityError),
    /// The survey loop failed.
    #[error(transparent)]
    Survey(#[from] SurveyError),
}

/// Outcome of one survey run, ready for rendering.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Layout the run surveyed.
    pub layout: &'static str,
    /// Lower empty bound used for the run.
    pub min_empty: usize,
    /// Upper empty bound used for the run.
    pub max_empty: usize,
    /// Counters and tied-best layouts.
    pub report: SurveyReport,
}

/// Executes the CLI command represented by `cli`.
///
/// A `survey` command yields one summary; a `sweep` yields one summary per
/// missing-building count, in ascending order.
///
/// # Errors
/// Returns [`CliError`] when city construction or the survey fails.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Vec<RunSummary>, CliError> {
    match cli.command {
        Command::Survey(command) => {
            Span::current().record("command", field::display("survey"));
            run_survey(command)
        }
        Command::Sweep(command) => {
            Span::current().record("command", field::display("sweep"));
            run_sweep(command)
        }
    }
}

#[instrument(
    name = "cli.survey",
    err,
    skip(command),
    fields(
        layout = command.layout.as_str(),
        min_empty = command.min_empty,
        max_empty = command.max_empty,
    ),
)]
pub(super) fn run_survey(command: SurveyCommand) -> Result<Vec<RunSummary>, CliError> {
    let summary = survey_layout(command.layout, command.min_empty, command.max_empty)?;
    Ok(vec![summary])
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(layout = command.layout.as_str(), max_missing = command.max_missing),
)]
pub(super) fn run_sweep(command: SweepCommand) -> Result<Vec<RunSummary>, CliError> {
    let mut summaries = Vec::with_capacity(command.max_missing + 1);
    for missing in 0..=command.max_missing {
        summaries.push(survey_layout(command.layout, missing, missing)?);
    }
    Ok(summaries)
}

fn survey_layout(
    layout: LayoutName,
    min_empty: usize,
    max_empty: usize,
) -> Result<RunSummary, CliError> {
    let mut city = layout.build_city(min_empty, max_empty)?;
    let report = survey(&mut city)?;
    info!(
        layout = layout.as_str(),
        min_empty,
        max_empty,
        legal = report.legal_arrangements(),
        best_score = report.best().map(plotwise_core::Incumbent::score),
        "survey completed"
    );
    Ok(RunSummary {
        layout: layout.as_str(),
        min_empty,
        max_empty,
        report,
    })
}

/// Renders `summaries` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] when writing to the supplied writer fails.
pub fn render_report(summaries: &[RunSummary], mut writer: impl Write) -> io::Result<()> {
    for summary in summaries {
        writeln!(
            writer,
            "layout {} (empty {}..={}):",
            summary.layout, summary.min_empty, summary.max_empty
        )?;
        writeln!(
            writer,
            "  arrangements: {} total, {} legal",
            summary.report.arrangements(),
            summary.report.legal_arrangements()
        )?;
        match summary.report.best() {
            None => writeln!(writer, "  best: none")?,
            Some(best) => {
                let stats = best.stats();
                writeln!(
                    writer,
                    "  best: income {} with happiness {} (score {}), {} tied",
                    stats.income(),
                    stats.happiness(),
                    stats.score(),
                    best.snapshots().len()
                )?;
                for snapshot in best.snapshots() {
                    writeln!(writer, "    {}", render_snapshot(snapshot))?;
                }
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn render_snapshot(snapshot: &Snapshot) -> String {
    let cells: Vec<String> = snapshot
        .kinds()
        .iter()
        .enumerate()
        .map(|(plot, kind)| format!("{plot}:{}", kind.symbol()))
        .collect();
    let tally: Vec<String> = BuildingCounts::from_kinds(snapshot.kinds())
        .iter()
        .map(|(kind, count)| format!("{}:{count}", kind.symbol()))
        .collect();
    format!("{} ({})", cells.join(" "), tally.join(" "))
}
