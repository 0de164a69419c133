use super::config::Format;
use anyhow::Result;
use gametree_core::engine::search::Comparison;
use gametree_core::{SearchOutcome, SearchStats, TraceLog};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Report<'a> {
    value: f64,
    best_label: Option<&'a str>,
    stats: &'a SearchStats,
    trace: &'a TraceLog,
}

impl<'a> From<&'a SearchOutcome> for Report<'a> {
    fn from(outcome: &'a SearchOutcome) -> Self {
        Self {
            value: outcome.value,
            best_label: outcome.best_label.as_deref(),
            stats: &outcome.stats,
            trace: &outcome.trace,
        }
    }
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    agrees: bool,
    visits_saved: usize,
    pruned: Report<'a>,
    full: Report<'a>,
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome, format: Format) -> Result<()> {
    if format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, &Report::from(outcome))?;
        writeln!(out)?;
        return Ok(());
    }
    write_trace(out, &outcome.trace, format)?;
    write_summary(out, outcome)
}

pub fn write_comparison<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    format: Format,
) -> Result<()> {
    if format == Format::Json {
        let report = ComparisonReport {
            agrees: comparison.agrees(),
            visits_saved: comparison.visits_saved(),
            pruned: Report::from(&comparison.pruned),
            full: Report::from(&comparison.full),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "# alpha-beta")?;
    write_trace(out, &comparison.pruned.trace, format)?;
    write_summary(out, &comparison.pruned)?;
    writeln!(out)?;
    writeln!(out, "# minimax")?;
    write_trace(out, &comparison.full.trace, format)?;
    write_summary(out, &comparison.full)?;
    writeln!(out)?;
    writeln!(
        out,
        "Agree: {}, visits saved: {}",
        if comparison.agrees() { "yes" } else { "no" },
        comparison.visits_saved()
    )?;
    Ok(())
}

fn write_trace<W: Write>(out: &mut W, trace: &TraceLog, format: Format) -> Result<()> {
    let lines = match format {
        Format::Values => trace.value_lines(),
        Format::Wire | Format::Json => trace.lines(),
    };
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, outcome: &SearchOutcome) -> Result<()> {
    writeln!(out, "Result: {}", outcome.value)?;
    if let Some(label) = &outcome.best_label {
        writeln!(out, "Best: {label}")?;
    }
    let stats = &outcome.stats;
    writeln!(
        out,
        "Stats: depth={}, nodes={}, visits={}, prunes={}, time={}ms",
        stats.depth, stats.nodes, stats.visits, stats.prunes, stats.time_ms
    )?;
    Ok(())
}
