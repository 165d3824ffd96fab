use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonecast_core::{normalize_phone, PhoneAddress};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw phone values, e.g. "05 0581 5487" or 966505815487
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedValue {
    input: String,
    address: Option<PhoneAddress>,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results: Vec<NormalizedValue> = args
        .values
        .into_iter()
        .map(|input| NormalizedValue {
            address: normalize_phone(&input),
            input,
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    for result in results {
        match result.address {
            Some(address) => println!("{} -> {}", result.input, address),
            None => println!("{} -> rejected", result.input),
        }
    }
    Ok(())
}
