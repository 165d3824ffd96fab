use crate::commands::extract::collect_addresses;
use crate::commands::{print_json, Context, ReadArgs};
use crate::error::invalid_input;
use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use phonecast_config::SendConfig;
use phonecast_core::{dedupe_addresses, normalize_phone, PhoneAddress};
use phonecast_send::{
    send_all, Content, ContentKind, Deliver, DeliveryStatus, DryRun, NoSleep, OpenCommand,
    Pacing, SendReport, Sleeper, ThreadSleeper,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Spreadsheet to read recipients from (csv, xlsx, xlsm, xlsb, xls, ods)
    #[arg(required_unless_present = "to")]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub read: ReadArgs,
    /// Extra recipient, merged with the file's numbers; repeatable
    #[arg(long, value_name = "NUMBER")]
    pub to: Vec<String>,
    /// Message text
    #[arg(long, short)]
    pub message: Option<String>,
    /// Image to attach
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Print the chat links instead of opening them
    #[arg(long)]
    pub dry_run: bool,
    /// Chat service base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,
    /// Command used to open chat links (overrides config)
    #[arg(long)]
    pub opener: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendSummary<'a> {
    column: Option<&'a str>,
    kind: ContentKind,
    dry_run: bool,
    sent: usize,
    failed: usize,
    #[serde(flatten)]
    report: &'a SendReport,
}

pub fn send(ctx: &Context<'_>, args: SendArgs) -> Result<()> {
    let content = Content::new(args.message, args.image)?;
    let manual = manual_addresses(&args.to)?;
    let (column, from_file) = match args.file.as_deref() {
        Some(file) => {
            let (column, extraction) = collect_addresses(ctx, file, &args.read)?;
            (Some(column), extraction.addresses)
        }
        None => (None, Vec::new()),
    };
    let addresses = dedupe_addresses(from_file.into_iter().chain(manual));
    if addresses.is_empty() {
        return Err(invalid_input("no recipients given"));
    }

    let settings = &ctx.config.send;
    let base_url = args.base_url.unwrap_or_else(|| settings.base_url.clone());

    let mut deliverer: Box<dyn Deliver> = if args.dry_run {
        Box::new(DryRun::new(base_url))
    } else {
        let opener = args.opener.as_deref().or(settings.opener.as_deref());
        Box::new(OpenCommand::new(base_url, opener)?)
    };
    if !deliverer.supports(content.kind()) {
        return Err(invalid_input(format!(
            "{} content cannot be sent with the {} deliverer; use --dry-run or send text only",
            content.kind().label(),
            deliverer.name()
        )));
    }

    let total = addresses.len();
    let json = ctx.json;
    let mut position = 0;
    let observer = |address: &PhoneAddress, status: &DeliveryStatus| {
        if json {
            return;
        }
        match status {
            DeliveryStatus::Sending => {
                position += 1;
                println!("[{}/{}] {}", position, total, address);
            }
            DeliveryStatus::Sent => println!("  ok"),
            DeliveryStatus::Failed(reason) => println!("  failed: {}", reason),
        }
    };

    let (pacing, mut sleeper): (Pacing, Box<dyn Sleeper>) = if args.dry_run {
        (Pacing::none(), Box::new(NoSleep))
    } else {
        (pacing_from(settings), Box::new(ThreadSleeper))
    };
    let report = send_all(
        deliverer.as_mut(),
        &addresses,
        &content,
        &pacing,
        sleeper.as_mut(),
        observer,
    )
    .with_context(|| "prepare delivery")?;

    if json {
        print_json(&SendSummary {
            column: column.as_ref().map(|column| column.name.as_str()),
            kind: content.kind(),
            dry_run: args.dry_run,
            sent: report.sent(),
            failed: report.failed(),
            report: &report,
        })?;
    } else {
        if args.dry_run {
            for outcome in &report.outcomes {
                if let Some(link) = outcome.link.as_deref() {
                    println!("{}", link);
                }
            }
        }
        let verb = if args.dry_run { "Prepared" } else { "Opened" };
        match column.as_ref() {
            Some(column) => println!(
                "{} {} of {} chats (column '{}'), failed {}",
                verb,
                report.sent(),
                total,
                column.name,
                report.failed()
            ),
            None => println!(
                "{} {} of {} chats, failed {}",
                verb,
                report.sent(),
                total,
                report.failed()
            ),
        }
    }

    if report.failed() > 0 {
        return Err(anyhow!("{} of {} deliveries failed", report.failed(), total));
    }
    Ok(())
}

// Unlike file cells, every hand-entered number must normalize.
fn manual_addresses(values: &[String]) -> Result<Vec<PhoneAddress>> {
    values
        .iter()
        .flat_map(|value| value.lines())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            normalize_phone(value)
                .ok_or_else(|| invalid_input(format!("invalid phone number for --to: {value}")))
        })
        .collect()
}

fn pacing_from(settings: &SendConfig) -> Pacing {
    Pacing {
        startup: Duration::from_secs(settings.startup_secs),
        between: Duration::from_secs(settings.between_secs),
        after_failure: Duration::from_secs(settings.after_failure_secs),
        final_settle: Duration::from_secs(settings.final_settle_secs),
    }
}
