// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use postplan::models::post::{Platform, Post, PostStatus};

/// Route warnings from rejected drops into the test output.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, June 10, 2030
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 10).unwrap()
    }

    /// June 10, 2030 at 08:00 local time
    pub fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2030, 6, 10, 8, 0, 0).unwrap()
    }
}

/// A scheduled post at the given hour/minute on June 10, 2030.
pub fn scheduled_post(id: &str, hour: u32, minute: u32) -> Post {
    scheduled_post_on(id, dates::monday(), hour, minute)
}

/// A scheduled post at the given date and hour/minute.
pub fn scheduled_post_on(id: &str, day: NaiveDate, hour: u32, minute: u32) -> Post {
    let time = day
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap();

    Post::builder()
        .id(id)
        .title(format!("Post {id}"))
        .content(format!("Content for {id}"))
        .scheduled_time(time)
        .platform(Platform::Facebook)
        .status(PostStatus::Scheduled)
        .build()
        .unwrap()
}

/// A week's worth of scheduled posts spread over morning and evening slots.
pub fn sample_week() -> Vec<Post> {
    let monday = dates::monday();
    vec![
        scheduled_post_on("mon-am", monday, 9, 0),
        scheduled_post_on("mon-pm", monday, 18, 30),
        scheduled_post_on("wed-am", monday.succ_opt().unwrap().succ_opt().unwrap(), 9, 0),
        scheduled_post_on(
            "fri-pm",
            NaiveDate::from_ymd_opt(2030, 6, 14).unwrap(),
            17,
            30,
        ),
    ]
}
