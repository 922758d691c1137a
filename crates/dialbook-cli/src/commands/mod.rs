use anyhow::Result;
use dialbook_store::ContactStore;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

pub mod completions;
pub mod contacts;

pub struct Context<'a> {
    pub store: &'a mut ContactStore,
    pub data_path: &'a Path,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
