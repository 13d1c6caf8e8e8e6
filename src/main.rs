mod cli;
mod mail;
mod models;
mod scanning;
mod watch;

use crate::mail::notifier::MailNotifier;
use crate::scanning::query::AvailabilityQuery;
use crate::scanning::scanner::SlotScanner;
use crate::scanning::window::DateRange;
use crate::watch::{WatchConfig, Watcher};
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "slotwatch=info".into()),
        )
        .init();
    dotenv().ok();

    let args = cli::Args::parse();
    anyhow::ensure!(
        args.mail_from.contains("gmail"),
        "sender must be a gmail address. if not, change the smtp server"
    );

    let start_date = args.start_date.unwrap_or_else(|| Local::now().date_naive());
    let range = DateRange::new(start_date, args.end_date)?;

    let password = rpassword::prompt_password(format!("SMTP password for {}: ", args.mail_from))?;
    let notifier = MailNotifier::new(&args.mail_from, password, &args.mail_to, &args.booking_url)?;

    let query = AvailabilityQuery::parse(&args.api_url)?;
    let scanner = SlotScanner::new(query, range)?.with_stride_days(args.stride_days);

    let watcher = Watcher::new(
        scanner,
        notifier,
        WatchConfig {
            interval: Duration::from_secs(args.poll_interval_secs),
            max_attempts: args.max_attempts,
        },
    );

    info!(
        "watching for appointments between {start_date} and {}, press ctrl-c to stop",
        args.end_date
    );
    match watcher
        .run(async {
            let _ = signal::ctrl_c().await;
        })
        .await?
    {
        Some(slots) => info!("found {} slot(s), stopping the watch", slots.len()),
        None => info!("stopped without finding any slots"),
    }

    Ok(())
}
