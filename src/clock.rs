use chrono::{Days, Local, NaiveDate};

/// Source of "today". Every date comparison in the crate is day-granular,
/// so the clock only ever hands out calendar dates.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock, truncated to the calendar date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date (tests and `--today`).
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Calendar date `n` days after `date`. Saturates at the end of chrono's range.
pub fn add_days(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MAX)
}

/// `b - a` in whole calendar days.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Parse an ISO calendar date. A date-time string is truncated to its date
/// part; anything else yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "Jan 5, 2024", or "Never" when unset.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "Never".to_string(),
    }
}

/// Human label for `date` relative to `today`. Dates more than a week away
/// in either direction fall back to [`format_date`].
pub fn relative_label(date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(d) = date else {
        return "Never".to_string();
    };

    match days_between(today, d) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n @ 2..=7 => format!("In {n} days"),
        n @ -7..=-2 => format!("{} days ago", -n),
        _ => format_date(Some(d)),
    }
}
