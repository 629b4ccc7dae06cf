//! Terminal output utilities.

use crate::processing::{DiffRecord, TopNEntry};
use colored::Colorize;

/// Named groups of lines, printed in the order given.
pub type Sections = Vec<(String, Vec<String>)>;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One row per ranked candidate: rank, network, matched/total.
pub fn top_n_rows(entries: &[TopNEntry], total_valid: usize) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{rank},{network},{covered}",
                rank = format_field(i + 1, 5),
                network = format_field(e.network, 20),
                covered = format_field(
                    format!("{}/{}", e.coverage.matched_count(), total_valid),
                    12
                ),
            )
        })
        .collect()
}

/// Diff records as header/line pairs, the layout of the diff output file.
pub fn diff_lines(records: &[DiffRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| [r.header.clone(), r.line.clone()])
        .collect()
}

/// Render sections with a banner line before each.
pub fn render_sections(sections: &Sections) -> Vec<String> {
    let mut out = Vec::new();
    for (name, lines) in sections {
        out.push(format!("##### {name} ({}) #####", lines.len()));
        out.extend(lines.iter().cloned());
    }
    out
}

pub fn print_diff(records: &[DiffRecord]) {
    if records.is_empty() {
        println!("{}", "No differences found".green());
        return;
    }
    for r in records {
        println!("{}", r.header.yellow());
        println!("{}", r.line);
    }
}

pub fn print_sections(sections: &Sections) {
    for line in render_sections(sections) {
        if line.starts_with("#####") {
            println!("{}", line.on_blue());
        } else {
            println!("{line}");
        }
    }
}
