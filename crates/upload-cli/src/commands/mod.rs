use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use upload_import::ImportOptions;

pub mod create_table;
pub mod import;

pub struct Context {
    pub json: bool,
    pub import: ImportOptions,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
