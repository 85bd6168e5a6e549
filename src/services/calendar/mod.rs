// View composer
// Computes the calendar days a view renders and handles date navigation

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::utils::date::week_start;

/// Calendar view types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
    Month,
}

/// Navigation direction for stepping the base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The calendar days the given view renders for a base date.
///
/// - Day: just the base date.
/// - Week: the 7 days from Monday of the base date's week through Sunday.
/// - Month: every day from Monday of the week containing the 1st through
///   Sunday of the week containing the last day, so boundary weeks are fully
///   populated.
pub fn view_days(base: NaiveDate, view: ViewType) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![base],
        ViewType::Week => {
            let start = week_start(base);
            (0..7).map(|offset| start + Duration::days(offset)).collect()
        }
        ViewType::Month => {
            let first = base.with_day(1).unwrap_or(base);
            let last = last_of_month(base);
            let start = week_start(first);
            let end = week_start(last) + Duration::days(6);

            let mut days = Vec::new();
            let mut current = start;
            while current <= end {
                days.push(current);
                current += Duration::days(1);
            }
            days
        }
    }
}

/// Chunk a month's day list into rows of 7 for grid rendering.
pub fn month_rows(days: &[NaiveDate]) -> Vec<Vec<NaiveDate>> {
    days.chunks(7).map(|week| week.to_vec()).collect()
}

/// Step the base date by one unit of the view's granularity.
///
/// Month steps clamp the day-of-month when the target month is shorter
/// (Jan 31 -> Feb 28).
pub fn step(base: NaiveDate, view: ViewType, direction: Direction) -> NaiveDate {
    match view {
        ViewType::Day => match direction {
            Direction::Previous => base - Duration::days(1),
            Direction::Next => base + Duration::days(1),
        },
        ViewType::Week => match direction {
            Direction::Previous => base - Duration::days(7),
            Direction::Next => base + Duration::days(7),
        },
        ViewType::Month => match direction {
            Direction::Previous => base.checked_sub_months(Months::new(1)).unwrap_or(base),
            Direction::Next => base.checked_add_months(Months::new(1)).unwrap_or(base),
        },
    }
}

/// Reset navigation to the current date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
