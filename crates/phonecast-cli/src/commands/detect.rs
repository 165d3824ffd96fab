use crate::commands::{load_source, print_json, Context, SourceArgs};
use anyhow::Result;
use clap::Args;
use phonecast_core::{find_phone_column, ColumnMatch, ColumnRef};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Serialize)]
struct DetectReport {
    columns: Vec<String>,
    selected: Option<ColumnRef>,
}

pub fn detect(ctx: &Context<'_>, args: DetectArgs) -> Result<()> {
    let table = load_source(&args.source.file, &args.source.read)?;
    let report = DetectReport {
        selected: find_phone_column(&table.headers),
        columns: table.headers,
    };

    if ctx.json {
        return print_json(&report);
    }

    match report.selected {
        Some(column) => match column.matched {
            ColumnMatch::Keyword(keyword) => println!(
                "Phone column: {} (#{}, matched \"{}\")",
                column.name,
                column.index + 1,
                keyword
            ),
            ColumnMatch::Fallback => println!(
                "Phone column: {} (#{}, no header matched; using first column)",
                column.name,
                column.index + 1
            ),
        },
        None => println!("No columns found"),
    }
    Ok(())
}
