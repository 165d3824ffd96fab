use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use phonecast_config::AppConfig;
use phonecast_core::Table;
use phonecast_sheet::{load_table, LoadOptions, SheetFormat};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::not_found;

pub mod completions;
pub mod detect;
pub mod extract;
pub mod normalize;
pub mod send;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Spreadsheet to read (csv, xlsx, xlsm, xlsb, xls, ods)
    pub file: PathBuf,
    #[command(flatten)]
    pub read: ReadArgs,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Worksheet name; defaults to the first sheet
    #[arg(long)]
    pub sheet: Option<String>,
    /// Read the file as this format regardless of its extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Treat the first row as data instead of headers
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Xlsx,
    Xlsm,
    Xlsb,
    Xls,
    Ods,
}

impl From<FormatArg> for SheetFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => SheetFormat::Csv,
            FormatArg::Xlsx => SheetFormat::Xlsx,
            FormatArg::Xlsm => SheetFormat::Xlsm,
            FormatArg::Xlsb => SheetFormat::Xlsb,
            FormatArg::Xls => SheetFormat::Xls,
            FormatArg::Ods => SheetFormat::Ods,
        }
    }
}

pub fn load_source(file: &Path, read: &ReadArgs) -> Result<Table> {
    if !file.is_file() {
        return Err(not_found(format!("input file {}", file.display())));
    }
    let options = LoadOptions {
        format: read.format.map(Into::into),
        sheet: read.sheet.clone(),
        has_headers: !read.no_headers,
    };
    load_table(file, &options).with_context(|| format!("read {}", file.display()))
}
