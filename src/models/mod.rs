// Module exports for models

pub mod post;
pub mod profile;
pub mod validation;
