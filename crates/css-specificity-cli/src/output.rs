//! Helpers for rendering scoring results.

use std::collections::BTreeMap;
use std::io::Write;

use css_specificity::{Category, SpecificityBreakdown, calculate_specificity};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Score of one selector, optionally with its per-category counts.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport<'a> {
    selector: &'a str,
    specificity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<BreakdownReport>,
}

/// Per-category counts keyed by category name, plus the triple used in
/// text output.
#[derive(Debug, Serialize)]
struct BreakdownReport {
    #[serde(flatten)]
    counts: BTreeMap<&'static str, usize>,
    #[serde(skip)]
    triple: String,
}

impl From<SpecificityBreakdown> for BreakdownReport {
    fn from(breakdown: SpecificityBreakdown) -> Self {
        let counts = Category::ALL
            .into_iter()
            .map(|category| (category.name(), breakdown.count(category)))
            .collect();
        Self {
            counts,
            triple: breakdown.to_string(),
        }
    }
}

impl<'a> ScoreReport<'a> {
    pub(crate) fn new(selector: &'a str, with_breakdown: bool) -> Self {
        let breakdown =
            with_breakdown.then(|| BreakdownReport::from(SpecificityBreakdown::calculate(selector)));
        Self {
            selector,
            specificity: calculate_specificity(selector),
            breakdown,
        }
    }
}

#[derive(Debug, Serialize)]
struct ComparedSelector<'a> {
    selector: &'a str,
    specificity: u64,
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    winner: &'a str,
    a: ComparedSelector<'a>,
    b: ComparedSelector<'a>,
}

#[derive(Debug, Serialize)]
struct RankReport<'a> {
    winner: &'a str,
    specificity: u64,
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub(crate) fn write_scores(
    writer: &mut dyn Write,
    reports: &[ScoreReport<'_>],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, reports),
        OutputFormat::Text => {
            for report in reports {
                let triple = report
                    .breakdown
                    .as_ref()
                    .map_or_else(String::new, |breakdown| format!("\t({})", breakdown.triple));
                writeln!(
                    writer,
                    "{}{triple}\t{}",
                    report.specificity, report.selector
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn write_comparison(
    writer: &mut dyn Write,
    a: &str,
    b: &str,
    winner: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(
            writer,
            &CompareReport {
                winner,
                a: ComparedSelector {
                    selector: a,
                    specificity: calculate_specificity(a),
                },
                b: ComparedSelector {
                    selector: b,
                    specificity: calculate_specificity(b),
                },
            },
        ),
        OutputFormat::Text => writeln!(writer, "{winner}").map_err(CliError::from),
    }
}

pub(crate) fn write_rank(
    writer: &mut dyn Write,
    winner: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(
            writer,
            &RankReport {
                winner,
                specificity: calculate_specificity(winner),
            },
        ),
        OutputFormat::Text => writeln!(writer, "{winner}").map_err(CliError::from),
    }
}
