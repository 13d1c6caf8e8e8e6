use crate::scanning::constants::{LIMIT_PARAM, START_DATE_PARAM, WINDOW_DAYS};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use url::Url;

/// Endpoint template for the provider's availabilities query, held as a base
/// URL plus an editable parameter list instead of a string that gets pattern
/// rewritten. The `limit` parameter is pinned to the window length once at
/// parse time; `start_date` is rewritten per window.
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    base: Url,
    params: Vec<(String, String)>,
}

impl AvailabilityQuery {
    pub fn parse(api_url: &str) -> Result<Self> {
        let mut base = Url::parse(api_url)
            .with_context(|| format!("invalid availabilities API URL {api_url:?}"))?;

        let mut params: Vec<(String, String)> = base
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        upsert(&mut params, LIMIT_PARAM, WINDOW_DAYS.to_string());

        base.set_query(None);
        Ok(AvailabilityQuery { base, params })
    }

    /// The concrete query URL for one window, with `start_date` pointing at
    /// the window's first day.
    pub fn url_for_window(&self, window_start: NaiveDate) -> Url {
        let mut params = self.params.clone();
        upsert(
            &mut params,
            START_DATE_PARAM,
            window_start.format("%Y-%m-%d").to_string(),
        );

        let mut url = self.base.clone();
        url.query_pairs_mut().extend_pairs(&params);
        url
    }
}

fn upsert(params: &mut Vec<(String, String)>, key: &str, value: String) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value,
        None => params.push((key.to_string(), value)),
    }
}
