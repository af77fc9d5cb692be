//! Output formatting and persistence for monthly summaries.
//!
//! Supports a plain-text table, pretty JSON, and CSV.

use anyhow::Result;
use chrono::Month;
use clap::ValueEnum;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::summary::MonthlySummary;

/// How a summary is written, to stdout or to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &MonthlySummary) {
    debug!("{:#?}", summary);
}

/// Serializes a summary as pretty-printed JSON.
pub fn to_json(summary: &MonthlySummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

fn month_name(month: u8) -> &'static str {
    Month::try_from(month).map(|m| m.name()).unwrap_or("?")
}

/// Renders a summary as an aligned text table, one line per month.
pub fn format_table(summary: &MonthlySummary) -> String {
    let widths: Vec<usize> = summary
        .years()
        .iter()
        .enumerate()
        .map(|(i, year)| {
            let widest = summary
                .rows()
                .iter()
                .map(|r| r.counts[i].to_string().len())
                .max()
                .unwrap_or(0);
            widest.max(year.to_string().len())
        })
        .collect();

    let mut out = format!("{:<9}", "Month");
    for (year, width) in summary.years().iter().zip(widths.iter().copied()) {
        out.push_str(&format!("  {year:>width$}"));
    }
    out.push('\n');

    for row in summary.rows() {
        out.push_str(&format!("{:<9}", month_name(row.month)));
        for (count, width) in row.counts.iter().zip(widths.iter().copied()) {
            out.push_str(&format!("  {count:>width$}"));
        }
        out.push('\n');
    }
    out
}

/// Writes a summary as CSV: a `MONTH` column followed by one column per year.
pub fn write_csv<W: Write>(writer: W, summary: &MonthlySummary) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header = vec!["MONTH".to_string()];
    header.extend(summary.years().iter().map(i32::to_string));
    writer.write_record(&header)?;

    for row in summary.rows() {
        let mut record = vec![row.month.to_string()];
        record.extend(row.counts.iter().map(usize::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders a summary in `format` as a single string.
pub fn render(summary: &MonthlySummary, format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Table => Ok(format_table(summary)),
        SummaryFormat::Json => {
            let mut json = to_json(summary)?;
            json.push('\n');
            Ok(json)
        }
        SummaryFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, summary)?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

/// Writes a summary to `path` in `format`, replacing any existing file.
pub fn write_summary_file(
    path: &Path,
    summary: &MonthlySummary,
    format: SummaryFormat,
) -> Result<()> {
    debug!(path = %path.display(), ?format, "Writing summary");
    let mut file = File::create(path)?;
    file.write_all(render(summary, format)?.as_bytes())?;
    Ok(())
}
