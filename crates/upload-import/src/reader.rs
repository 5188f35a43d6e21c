use crate::decode::{decode_strict, decode_text};
use crate::error::{ImportError, Result};
use crate::report::{DiagnosticKind, ImportReport, RowDiagnostic};
use csv::{ByteRecord, Position};
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use upload_core::UserRecord;

const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            encoding: UTF_8,
        }
    }
}

pub fn read_users_from_path(path: &Path, options: &ImportOptions) -> Result<ImportReport> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_users(BufReader::new(file), options)
}

/// Reads `[name, surname, email]` rows, formatting each user and keeping the
/// ones with a valid email.
///
/// Rows are numbered by the physical line they start on, so blank lines count.
/// The first row is conventionally a header: when it fails validation it is
/// dropped without a diagnostic. Every later invalid row gets one diagnostic
/// and the pass continues. Only I/O failures abort the pass.
pub fn read_users<R: Read>(input: R, options: &ImportOptions) -> Result<ImportReport> {
    // Every record, including an unterminated last line, ends by consuming
    // exactly one '\n'. A '\r' left before it is trimmed with the field.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(input.chain(&b"\n"[..]));

    let mut report = ImportReport::default();
    let mut record = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(ImportError::Csv(err)),
            Err(err) => {
                report.rows_read += 1;
                report.skipped += 1;
                report.diagnostics.push(RowDiagnostic {
                    row: report.rows_read,
                    kind: DiagnosticKind::Unreadable {
                        message: err.to_string(),
                    },
                });
                continue;
            }
        }

        let row = start_line(&record, reader.position());
        report.rows_read = row;
        if is_blank(&record) {
            continue;
        }

        let Some(user) = decode_user(&record, options.encoding) else {
            report.skipped += 1;
            if row == 1 {
                report.header_skipped = true;
            } else {
                report.diagnostics.push(RowDiagnostic {
                    row,
                    kind: DiagnosticKind::Unreadable {
                        message: format!("email is not valid {}", options.encoding.name()),
                    },
                });
            }
            continue;
        };

        let user = user.formatted();
        if user.is_email_valid() {
            report.accepted.push(user);
            continue;
        }

        report.skipped += 1;
        if row == 1 {
            report.header_skipped = true;
        } else {
            report.diagnostics.push(RowDiagnostic {
                row,
                kind: DiagnosticKind::InvalidEmail {
                    full_name: user.full_name(),
                },
            });
        }
    }

    Ok(report)
}

/// Line the record started on: the reader sits just past the record's
/// terminator, and quoted fields may hold newlines of their own.
fn start_line(record: &ByteRecord, end: &Position) -> usize {
    let embedded = record.as_slice().iter().filter(|&&byte| byte == b'\n').count() as u64;
    let line = end.line().saturating_sub(embedded + 1).max(1);
    usize::try_from(line).unwrap_or(usize::MAX)
}

/// A line holding only whitespace, such as the `\r` of a CRLF blank line.
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace)
}

/// Name and surname always decode; `None` when the email does not.
fn decode_user(record: &ByteRecord, encoding: &'static Encoding) -> Option<UserRecord> {
    let field = |index: usize| record.get(index).unwrap_or_default();
    let email = decode_strict(field(2), encoding)?;
    Some(UserRecord::new(
        decode_text(field(0), encoding),
        decode_text(field(1), encoding),
        email,
    ))
}
