use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use indicatif::ProgressBar;

use crate::engine::SortRule;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

// Spinner currently drawn on the terminal, if any.
static ACTIVE_SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// [`days_since_epoch`] of 0001-01-01.
pub const EARLIEST_DAY: i64 = 1 - UNIX_EPOCH_DAYS_FROM_CE;

/// Parses a release date as delivered by Spotify.
///
/// Dates come with a precision of `year`, `month` or `day`. Coarser dates
/// resolve to the first day of their period, so `"1999"` becomes 1999-01-01
/// and `"1999-05"` becomes 1999-05-01. An unknown precision falls back to the
/// shape of the string.
pub fn parse_release_date(date: &str, precision: &str) -> Option<NaiveDate> {
    let date = date.trim();
    match precision {
        "year" => parse_year(date),
        "month" => parse_month(date),
        "day" => NaiveDate::parse_from_str(date, DATE_FORMAT).ok(),
        _ => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .ok()
            .or_else(|| parse_month(date))
            .or_else(|| parse_year(date)),
    }
}

fn parse_year(date: &str) -> Option<NaiveDate> {
    let year = date.get(..4)?.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn parse_month(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", date.get(..7)?), DATE_FORMAT).ok()
}

/// Parses a `YYYY-MM-DD` date bound.
pub fn parse_date_bound(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Number of days between 1970-01-01 and `date`, negative before the epoch.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - UNIX_EPOCH_DAYS_FROM_CE
}

/// Builds the Spotify URI of a track id.
pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

/// Parses a sort rule given as `NAME`, `NAME:asc` or `NAME:desc`.
///
/// Only the direction is checked here. Whether `NAME` is a known feature is
/// decided by the engine, before it touches the playlist.
pub fn parse_sort_rule(s: &str) -> Result<SortRule, String> {
    let (name, direction) = match s.split_once(':') {
        Some((name, direction)) => (name.trim(), direction.trim().to_lowercase()),
        None => (s.trim(), "asc".to_string()),
    };

    if name.is_empty() {
        return Err("sort rule needs a feature name".to_string());
    }

    let descending = match direction.as_str() {
        "asc" | "ascending" => false,
        "desc" | "descending" => true,
        other => {
            return Err(format!(
                "invalid sort direction '{}', expected 'asc' or 'desc'",
                other
            ));
        }
    };

    Ok(SortRule::new(name, descending))
}

/// Registers the spinner that console output has to be printed around.
///
/// Pass `None` once the spinner is finished.
pub fn set_active_spinner(spinner: Option<ProgressBar>) {
    if let Ok(mut active) = ACTIVE_SPINNER.lock() {
        *active = spinner;
    }
}

/// Prints a line to stdout.
///
/// While a spinner is ticking it is hidden for the write and redrawn below
/// the line afterwards.
pub fn print_line(line: &str) {
    let spinner = ACTIVE_SPINNER.lock().ok().and_then(|active| active.clone());
    match spinner {
        Some(pb) if !pb.is_finished() => pb.suspend(|| println!("{}", line)),
        _ => println!("{}", line),
    }
}
