// Time-slot index
// Buckets posts into calendar grid cells; a linear filter recomputed per
// render, which is fine at the expected volume (dozens of posts, not
// thousands)

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::post::Post;

/// Minutes per grid slot in day/week views.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// The fixed ladder of slot times for a day column: 00:00, 00:30, ... 23:30.
pub fn day_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::with_capacity((24 * 60 / SLOT_INTERVAL_MINUTES) as usize);
    for hour in 0..24 {
        for step in 0..(60 / SLOT_INTERVAL_MINUTES) {
            if let Some(time) = NaiveTime::from_hms_opt(hour, step * SLOT_INTERVAL_MINUTES, 0) {
                slots.push(time);
            }
        }
    }
    slots
}

/// Posts whose scheduled time matches the slot's hour and minute exactly.
///
/// When `day` is supplied (day/week views) the calendar date must match as
/// well; without it the slot matches across all dates.
pub fn posts_for_time_slot<'a>(
    posts: &'a [Post],
    slot: NaiveTime,
    day: Option<NaiveDate>,
) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| {
            let scheduled = post.scheduled_time;
            let time_matches =
                scheduled.hour() == slot.hour() && scheduled.minute() == slot.minute();
            let day_matches = match day {
                Some(day) => scheduled.date_naive() == day,
                None => true,
            };
            time_matches && day_matches
        })
        .collect()
}

/// Posts scheduled on the given calendar date, regardless of time. Month view
/// matching.
pub fn posts_for_day<'a>(posts: &'a [Post], day: NaiveDate) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.scheduled_time.date_naive() == day)
        .collect()
}

/// Occupancy probe for drag targets.
pub fn slot_occupied(posts: &[Post], slot: NaiveTime, day: Option<NaiveDate>) -> bool {
    !posts_for_time_slot(posts, slot, day).is_empty()
}
