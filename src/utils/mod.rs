//! Helpers for writing loaders and pages.

pub mod date;
pub mod html;
pub mod markdown;
pub mod path;
pub mod reading_time;
pub mod slug;
