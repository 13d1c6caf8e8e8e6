use crate::models::availability::AvailabilityResponse;
use crate::scanning::constants::{USER_AGENT, WINDOW_DAYS};
use crate::scanning::query::AvailabilityQuery;
use crate::scanning::window::DateRange;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use tracing::{debug, info};

/// Walks a date range in provider-sized windows and collects every open slot
/// the availabilities endpoint reports for them.
pub struct SlotScanner {
    client: reqwest::Client,
    query: AvailabilityQuery,
    range: DateRange,
    stride_days: i64,
}

impl SlotScanner {
    pub fn new(query: AvailabilityQuery, range: DateRange) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(SlotScanner {
            client,
            query,
            range,
            stride_days: WINDOW_DAYS,
        })
    }

    /// Override the window stepping. A stride of 1 queries every day of the
    /// range instead of one query per 14-day window.
    pub fn with_stride_days(mut self, stride_days: i64) -> Self {
        self.stride_days = stride_days;
        self
    }

    /// One pass over the whole range. Returns the open slots of all windows
    /// as display-formatted timestamps, in query order; empty when nothing is
    /// bookable yet. Any fetch or parse failure aborts the pass, there are no
    /// partial results.
    pub async fn scan(&self) -> Result<Vec<String>> {
        let mut all_slots = Vec::new();

        for window_start in self.range.window_starts(self.stride_days) {
            let url = self.query.url_for_window(window_start);
            debug!("checking URL {url}");

            let response: AvailabilityResponse = self
                .client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .with_context(|| format!("availabilities query for {window_start} failed"))?
                .json()
                .await
                .with_context(|| format!("availabilities response for {window_start} is not the expected JSON"))?;

            for entry in response.availabilities {
                for slot in entry.slots {
                    all_slots.push(format_slot(&slot)?);
                }
            }
        }

        info!("found the following slots: {all_slots:?}");
        Ok(all_slots)
    }
}

/// Turns a provider slot timestamp into the `DD.MM. HH:MM` display form.
/// The wall-clock time is kept exactly as written, whether or not the
/// timestamp carries a UTC offset suffix.
pub fn format_slot(raw: &str) -> Result<String> {
    let wall_time = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.naive_local(),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("slot timestamp {raw:?} is not ISO-8601"))?,
    };
    Ok(wall_time.format("%d.%m. %H:%M").to_string())
}
