use crate::commands::{load_source, print_json, Context, ReadArgs, SourceArgs};
use anyhow::{Context as _, Result};
use clap::Args;
use phonecast_core::{extract_phones, ColumnRef, Extraction, PhoneAddress};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Write one address per line to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExtractReport {
    column: ColumnRef,
    addresses: Vec<PhoneAddress>,
    total: usize,
    blank: usize,
    duplicates: usize,
    rejected: Vec<String>,
    output: Option<String>,
}

/// Loads the source and extracts its addresses, failing with diagnostics when
/// nothing usable is found.
pub fn collect_addresses(
    ctx: &Context<'_>,
    file: &Path,
    read: &ReadArgs,
) -> Result<(ColumnRef, Extraction)> {
    let table = load_source(file, read)?;
    let extraction = extract_phones(&table)
        .with_context(|| format!("extract phone numbers from {}", file.display()))?;

    if let Some(column) = extraction.column.as_ref() {
        debug!(column = %column.name, index = column.index, "phone column selected");
        if column.is_fallback() {
            warn!(
                column = %column.name,
                "no phone column header found; using the first column"
            );
        }
    }
    if !extraction.rejected.is_empty() {
        debug!(rejected = extraction.rejected.len(), "values rejected");
    }

    let column = extraction.check(ctx.config.sample_limit)?.clone();
    Ok((column, extraction))
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let (column, extraction) = collect_addresses(ctx, &args.source.file, &args.source.read)?;
    let duplicates = extraction.duplicates();
    let Extraction {
        addresses,
        rejected,
        blank,
        total,
        ..
    } = extraction;

    if let Some(path) = args.out.as_deref() {
        write_addresses(path, &addresses)?;
    }

    let report = ExtractReport {
        column,
        addresses,
        total,
        blank,
        duplicates,
        rejected,
        output: args.out.as_ref().map(|path| path.display().to_string()),
    };

    if ctx.json {
        return print_json(&report);
    }

    match args.out.as_deref() {
        Some(path) => println!(
            "Extracted {} phone numbers from column '{}' to {}",
            report.addresses.len(),
            report.column.name,
            path.display()
        ),
        None => {
            for address in &report.addresses {
                println!("{}", address);
            }
        }
    }
    if !report.rejected.is_empty() {
        eprintln!(
            "Skipped {} invalid values in column '{}'",
            report.rejected.len(),
            report.column.name
        );
    }
    Ok(())
}

fn write_addresses(path: &Path, addresses: &[PhoneAddress]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    let mut data = String::new();
    for address in addresses {
        data.push_str(address.as_str());
        data.push('\n');
    }
    fs::write(path, data).with_context(|| format!("write output file {}", path.display()))
}
