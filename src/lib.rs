// Postplan Library
// Scheduling, calendar and validation core for a social-media post planner

pub mod models;
pub mod services;
pub mod utils;
