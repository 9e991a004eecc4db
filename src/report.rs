//! Rendering a finished [`AggregateSnapshot`]: colored console table, CSV export, JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::types::{AggregateSnapshot, TypeStat};
use crate::utils::Colors;
use crate::utils::config::TableLayout;
use crate::utils::size::format_size;

const HIDDEN_ROW_LABEL: &str = "Hidden files";

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(*w));
        line.push('+');
    }
    line
}

/// Console report. Per-type rows are sorted by descending total size.
pub fn render_table(snapshot: &AggregateSnapshot) -> String {
    let mut out = String::new();
    if snapshot.total_files == 0 {
        let _ = writeln!(out, "{}", Colors::failure("No files found."));
        return out;
    }

    let summary_rule = rule(&[TableLayout::SUMMARY_WIDTH]);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", Colors::frame(&summary_rule));
    let _ = writeln!(
        out,
        "{} {:<25}{} {:<30}{}",
        Colors::frame("|"),
        Colors::value(&format!("Total files: {}", snapshot.total_files)),
        Colors::frame(" |"),
        Colors::value(&format!("Total size: {}", format_size(snapshot.total_bytes))),
        Colors::frame(" |"),
    );
    let _ = writeln!(out, "{}", Colors::frame(&summary_rule));
    let _ = writeln!(out);

    let table_rule = rule(&[
        TableLayout::TYPE_WIDTH,
        TableLayout::COUNT_WIDTH,
        TableLayout::SIZE_WIDTH,
    ]);
    let bar = Colors::frame("|");
    let _ = writeln!(out, "{}", Colors::frame(&table_rule));
    let _ = writeln!(
        out,
        "{bar}{:<tw$}{bar}{:>cw$}{bar}{:>sw$}{bar}",
        Colors::header(" File Type"),
        Colors::header("Count"),
        Colors::header("Total Size"),
        tw = TableLayout::TYPE_WIDTH,
        cw = TableLayout::COUNT_WIDTH,
        sw = TableLayout::SIZE_WIDTH,
    );
    let _ = writeln!(out, "{}", Colors::frame(&table_rule));
    for (label, stat) in snapshot.sorted_by_size() {
        let _ = writeln!(
            out,
            "{bar}{:<tw$}{bar}{:>cw$}{bar}{:>sw$}{bar}",
            Colors::value(label),
            Colors::value(&stat.count.to_string()),
            Colors::value(&format_size(stat.total_size)),
            tw = TableLayout::TYPE_WIDTH,
            cw = TableLayout::COUNT_WIDTH,
            sw = TableLayout::SIZE_WIDTH,
        );
    }
    let _ = writeln!(out, "{}", Colors::frame(&table_rule));

    if snapshot.hidden_files > 0 {
        let _ = writeln!(
            out,
            "\n{}",
            Colors::header(&format!(
                "Hidden files: {} (Size: {})",
                snapshot.hidden_files,
                format_size(snapshot.hidden_bytes)
            ))
        );
    }
    out
}

pub fn print_results(snapshot: &AggregateSnapshot) {
    print!("{}", render_table(snapshot));
}

/// Write the CSV report: `FileType,Count,TotalSize` (plus `SizeHuman` when `human`), one row per
/// type by descending size, then a `Hidden files` row when hidden files were left out.
pub fn write_csv<W: Write>(snapshot: &AggregateSnapshot, writer: W, human: bool) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec!["FileType", "Count", "TotalSize"];
    if human {
        header.push("SizeHuman");
    }
    wtr.write_record(&header)?;

    let mut write_row = |label: &str, count: u64, bytes: u64| -> csv::Result<()> {
        let mut row = vec![label.to_string(), count.to_string(), bytes.to_string()];
        if human {
            row.push(format_size(bytes));
        }
        wtr.write_record(&row)
    };
    for (label, stat) in snapshot.sorted_by_size() {
        write_row(label, stat.count, stat.total_size)?;
    }
    if snapshot.hidden_files > 0 {
        write_row(HIDDEN_ROW_LABEL, snapshot.hidden_files, snapshot.hidden_bytes)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export the CSV report to `path`. Failing to create the file is an error.
pub fn export_csv(snapshot: &AggregateSnapshot, path: &Path, human: bool) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create output file: {}", path.display()))?;
    write_csv(snapshot, std::io::BufWriter::new(file), human)
        .with_context(|| format!("Cannot write output file: {}", path.display()))
}

#[derive(Serialize)]
struct JsonRow<'a> {
    file_type: &'a str,
    #[serde(flatten)]
    stat: TypeStat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_files: u64,
    total_bytes: u64,
    hidden_files: u64,
    hidden_bytes: u64,
    types: Vec<JsonRow<'a>>,
}

/// JSON report with rows in the same order as the table.
pub fn render_json(snapshot: &AggregateSnapshot) -> Result<String> {
    let report = JsonReport {
        total_files: snapshot.total_files,
        total_bytes: snapshot.total_bytes,
        hidden_files: snapshot.hidden_files,
        hidden_bytes: snapshot.hidden_bytes,
        types: snapshot
            .sorted_by_size()
            .into_iter()
            .map(|(file_type, stat)| JsonRow { file_type, stat })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
