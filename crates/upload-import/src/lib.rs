mod decode;
pub mod error;
pub mod reader;
pub mod report;

pub use error::ImportError;
pub use reader::{read_users, read_users_from_path, ImportOptions};
pub use report::{DiagnosticKind, ImportReport, RowDiagnostic};
