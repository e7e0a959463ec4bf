//! Calendar-aligned date sequences for temporal axes

use chrono::{Datelike, Months, NaiveDate};
use relief_core::TemporalResolution;

/// First day of the date's month
fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn step_dates<F>(start: NaiveDate, end: NaiveDate, months: u32, keep: F) -> Vec<NaiveDate>
where
    F: Fn(NaiveDate, NaiveDate) -> bool,
{
    let end = start_of_month(end);
    let mut current = start_of_month(start);
    let mut dates = Vec::new();

    while keep(current, end) {
        dates.push(current);
        match current.checked_add_months(Months::new(months)) {
            Some(next) => current = next,
            None => break,
        }
    }

    dates
}

/// One date per year from `start`, excluding `end`
pub fn get_dates_separated_by_year(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    step_dates(start, end, 12, |current, end| current < end)
}

/// One date per month from `start`, including `end`
pub fn get_dates_separated_by_months(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    step_dates(start, end, 1, |current, end| current <= end)
}

/// Axis tick dates covering `start..=end` at the given resolution
///
/// Year ticks stop before the start month of the year after `end`, so every
/// year up to and including `end`'s year gets exactly one tick.
pub fn get_temporal_ticks(
    start: NaiveDate,
    end: NaiveDate,
    resolution: TemporalResolution,
) -> Vec<NaiveDate> {
    match resolution {
        TemporalResolution::Month => get_dates_separated_by_months(start, end),
        TemporalResolution::Year => {
            let end = start_of_month(start)
                .with_year(end.year() + 1)
                .unwrap_or(end);
            get_dates_separated_by_year(start, end)
        }
    }
}
