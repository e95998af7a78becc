//! Expiry date parsing in the fixed `dd.mm.yy` format.
//!
//! Two-digit years follow chrono's `%y` rule: 00-69 map to 20xx, 70-99 to 19xx.

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%d.%m.%y";

/// Items whose expiry falls inside this window from "now" count as expiring.
pub const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Parses `s` as `dd.mm.yy`. Impossible calendar dates are rejected.
pub fn parse(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

pub fn is_valid(s: &str) -> bool {
    parse(s).is_ok()
}

/// True when midnight of `date` is less than seven days after `now`.
/// Dates already in the past always qualify.
pub fn is_expiring_soon(date: NaiveDate, now: NaiveDateTime) -> bool {
    date.and_hms_opt(0, 0, 0)
        .map(|expires_at| expires_at - now < Duration::days(EXPIRY_WINDOW_DAYS))
        .unwrap_or(false)
}

/// Local wall-clock time, no timezone attached.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
