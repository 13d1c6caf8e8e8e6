use crate::scanning::constants::{
    DEFAULT_BOOKING_URL, DEFAULT_POLL_INTERVAL_SECS, EXAMPLE_URL, WINDOW_DAYS,
};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "slotwatch",
    about = "Watches a Doctolib availabilities endpoint and mails you once a slot opens"
)]
pub struct Args {
    /// API URL to query for appointments. Go to the booking page, fill out
    /// the reason for your visit and copy the requested availabilities URL,
    /// e.g. using chrome developer tool's network tab.
    #[arg(short = 'a', long, help = format!("API URL to query for appointments. Should look similar to {EXAMPLE_URL}"))]
    pub api_url: String,

    /// URL where the user can book the appointment; it is put into the
    /// notification for speedy booking.
    #[arg(short = 'b', long, default_value = DEFAULT_BOOKING_URL)]
    pub booking_url: String,

    /// Start date to look for appointments, format like 2022-07-03.
    /// Defaults to today.
    #[arg(short = 's', long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// End date to look for appointments, format like 2022-07-03
    #[arg(short = 'e', long, value_parser = parse_date)]
    pub end_date: NaiveDate,

    /// Email recipient of the notification. For an SMS, use the format
    /// 0049176...@smsgatewayofphoneprovider.de
    #[arg(short = 't', long)]
    pub mail_to: String,

    /// Email sender of the notification; must be a gmail address
    #[arg(short = 'f', long)]
    pub mail_from: String,

    /// Seconds to wait between polls of the availabilities endpoint
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_secs: u64,

    /// Stop after this many polls without a find (default: poll forever)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Days between window start dates; 1 queries every single day of the
    /// range
    #[arg(long, default_value_t = WINDOW_DAYS, value_parser = clap::value_parser!(i64).range(1..))]
    pub stride_days: i64,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2022-07-03: {e}"))
}
