//! One-directional statement diff between two filter lists.

use crate::error::ToolError;
use crate::models::{Action, FilterListModel};
use serde::Serialize;

/// A header describing a missing statement, followed by its original line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRecord {
    pub header: String,
    pub line: String,
}

/// Single-use comparison of one model against others.
#[derive(Debug)]
pub struct FilterListDiffer<'a> {
    model: &'a FilterListModel,
    compared: bool,
}

impl<'a> FilterListDiffer<'a> {
    pub fn new(model: &'a FilterListModel) -> FilterListDiffer<'a> {
        FilterListDiffer {
            model,
            compared: false,
        }
    }

    /// Report every statement of this model whose key is missing from the
    /// same-action keys of `other`.
    ///
    /// Keys are compared as strings, so `10.0.0.0/8` and `10.0.0.0/8 le 8`
    /// are reported even though they match the same routes. Permit statements
    /// are reported before deny statements.
    pub fn compare(
        &mut self,
        other: &FilterListModel,
        other_label: &str,
    ) -> Result<Vec<DiffRecord>, ToolError> {
        log::debug!("compare() {} against {other_label}", self.model.kind());
        if self.compared {
            log::error!("Tried to run a comparison, when one has already been run!");
            return Err(ToolError::AlreadyCompared);
        }
        if other.kind() != self.model.kind() {
            return Err(ToolError::TypeMismatch {
                expected: self.model.kind(),
                found: other.kind(),
            });
        }
        self.compared = true;

        let mut records = Vec::new();
        for action in Action::ALL {
            for statement in self.model.statements_with(action) {
                if other.has_key(action, &statement.key) {
                    continue;
                }
                let name = statement
                    .list_name
                    .as_deref()
                    .or(self.model.name())
                    .unwrap_or("unnamed");
                records.push(DiffRecord {
                    header: format!(
                        "{action} {key} not in {kind} {name} in file {other_label}",
                        key = statement.key,
                        kind = self.model.kind(),
                    ),
                    line: self.model.raw_line(statement).to_string(),
                });
            }
        }
        log::info!(
            "Found {} {} statements missing from {other_label}",
            records.len(),
            self.model.kind()
        );
        Ok(records)
    }
}

/// `compare(a, b) ++ compare(b, a)`.
pub fn symmetric_diff(
    a: &FilterListModel,
    a_label: &str,
    b: &FilterListModel,
    b_label: &str,
) -> Result<Vec<DiffRecord>, ToolError> {
    let mut records = FilterListDiffer::new(a).compare(b, b_label)?;
    records.extend(FilterListDiffer::new(b).compare(a, a_label)?);
    Ok(records)
}
