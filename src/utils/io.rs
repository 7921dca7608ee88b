use crate::Report;
use crate::config::OutputFormat;
use crate::error::{AnalyzerError, Result};
use log::{debug, error};
use serde::Serialize;
use std::io::Write;

pub const LABEL_WIDTH: usize = 16;
pub const COUNT_WIDTH: usize = 2;

#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    label: &'a str,
    count: usize,
}

fn rule() -> String {
    "=".repeat(LABEL_WIDTH + COUNT_WIDTH + 7)
}

fn fit_label(label: &str) -> String {
    label.chars().take(LABEL_WIDTH).collect()
}

pub fn render_table(title: &str, entries: &[(String, usize)]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');

    for (label, count) in entries {
        out.push_str(&format!(
            "| {:<lw$} | {:>cw$} |\n",
            fit_label(label),
            count,
            lw = LABEL_WIDTH,
            cw = COUNT_WIDTH
        ));
    }

    out.push_str(&rule());
    out.push('\n');
    out
}

pub fn render_words(words: &[String]) -> String {
    let mut out = String::new();
    for word in words {
        out.push_str(word);
        out.push('\n');
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let json = match report {
        Report::Ranking { entries, .. } => {
            let rows: Vec<RankedEntry> = entries
                .iter()
                .map(|(label, count)| RankedEntry {
                    label,
                    count: *count,
                })
                .collect();
            serde_json::to_string_pretty(&rows)
        }
        Report::Words(words) => serde_json::to_string_pretty(words),
    };

    json.map_err(|e| {
        error!("Failed to serialize report to JSON: {}", e);
        AnalyzerError::from(e)
    })
}

pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match (format, report) {
        (OutputFormat::Json, _) => render_json(report).map(|json| json + "\n"),
        (OutputFormat::Table, Report::Ranking { title, entries }) => {
            Ok(render_table(title, entries))
        }
        (OutputFormat::Table, Report::Words(words)) => Ok(render_words(words)),
    }
}

pub fn write_report<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    let rendered = render_report(report, format)?;

    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| AnalyzerError::io("Failed to write report", e))?;

    debug!("Wrote {} bytes of {:?} output", rendered.len(), format);
    Ok(())
}
