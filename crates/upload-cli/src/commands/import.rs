use crate::commands::{print_json, Context};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::debug;
use upload_import::{read_users_from_path, ImportReport};
use upload_store::Store;

/// Where a validated batch goes once the file has been read.
pub enum Destination<'a> {
    DryRun,
    Database(&'a mut Store),
}

#[derive(Debug, Serialize)]
struct ImportSummary<'a> {
    file: String,
    dry_run: bool,
    saved: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    report: &'a ImportReport,
}

pub fn process_file(ctx: &Context, path: &Path, destination: Destination<'_>) -> Result<()> {
    let report = read_users_from_path(path, &ctx.import)?;
    debug!(
        path = %path.display(),
        rows = report.rows_read,
        accepted = report.accepted.len(),
        skipped = report.skipped,
        header_skipped = report.header_skipped,
        "file processed"
    );

    if !ctx.json {
        for diagnostic in &report.diagnostics {
            println!("{}", diagnostic);
        }
    }

    let (dry_run, outcome) = match destination {
        Destination::DryRun => (true, Ok(0)),
        Destination::Database(store) => (false, store.users().save_users(&report.accepted)),
    };

    // The JSON summary carries the diagnostics, so it is printed even when the
    // save failed; the error itself is reported after it.
    if ctx.json {
        print_json(&ImportSummary {
            file: path.display().to_string(),
            dry_run,
            saved: *outcome.as_ref().unwrap_or(&0),
            error: outcome.as_ref().err().map(ToString::to_string),
            report: &report,
        })?;
    }
    let saved = outcome?;
    debug!(saved, dry_run, "batch handled");
    if ctx.json {
        return Ok(());
    }

    if dry_run {
        println!("{} valid user(s) found.", report.accepted.len());
        println!("Dry run completed.");
    } else {
        println!("Users added to the database.");
    }
    Ok(())
}
