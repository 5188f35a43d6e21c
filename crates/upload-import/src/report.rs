use serde::Serialize;
use std::fmt;
use upload_core::UserRecord;

/// Outcome of one pass over an input file. `accepted` is the batch handed to
/// the database writer, in file order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub rows_read: usize,
    pub accepted: Vec<UserRecord>,
    pub skipped: usize,
    pub header_skipped: bool,
    pub diagnostics: Vec<RowDiagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDiagnostic {
    pub row: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    InvalidEmail { full_name: String },
    Unreadable { message: String },
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidEmail { full_name } => {
                write!(f, "Invalid Email for row {}: {}.", self.row, full_name)
            }
            DiagnosticKind::Unreadable { message } => {
                write!(f, "Unreadable row {}: {}.", self.row, message)
            }
        }
    }
}
