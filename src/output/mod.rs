//! Output formatting for aggregation and diff results.
//!
//! - [`json`] - JSON aggregation report
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{AggregationReport, RankedCandidate};
pub use terminal::{
    diff_lines, format_field, print_diff, print_sections, render_sections, top_n_rows, Sections,
};

use std::error::Error;
use std::path::{Path, PathBuf};

/// `<stem>_YYYY-MM-DD.<ext>` for today's date.
pub fn dated_file_name(stem: &str, ext: &str) -> String {
    let now = chrono::Local::now();
    format!("{stem}_{}.{ext}", now.format("%Y-%m-%d"))
}

/// Write `lines` to `dir/name`, one per line, and return the path written.
pub fn write_lines(dir: &Path, name: &str, lines: &[String]) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Error creating output directory {}: {e}", dir.display()))?;
    let path = dir.join(name);
    let mut body = lines.join("\n");
    body.push('\n');
    std::fs::write(&path, body)
        .map_err(|e| format!("Error writing output file {}: {e}", path.display()))?;
    log::info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(path)
}
