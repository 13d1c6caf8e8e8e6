// Provider query inputs
pub const EXAMPLE_URL: &str = "https://www.doctolib.de/availabilities.json?start_date=2022-07-03&visit_motive_ids=111111&agenda_ids=11111&insurance_sector=public&practice_ids=111111&limit=14";

pub const DEFAULT_BOOKING_URL: &str = "https://www.doctolib.de";

// The provider returns at most this many days per availabilities query;
// windows are stepped by the same amount unless a denser stride is requested.
pub const WINDOW_DAYS: i64 = 14;

// Query parameters rewritten on the endpoint template
pub const START_DATE_PARAM: &str = "start_date";
pub const LIMIT_PARAM: &str = "limit";

// Header the provider expects on availability queries
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) ";

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60 * 5;
