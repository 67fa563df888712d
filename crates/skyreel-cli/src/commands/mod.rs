//! CLI command implementations

pub mod doctor;
pub mod render;
pub mod soundtrack;
pub mod timeline;
