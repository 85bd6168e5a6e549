// Module exports for services

pub mod analytics;
pub mod calendar;
pub mod drag;
pub mod preview;
pub mod publications;
pub mod slots;
pub mod validation;
