//! Reusable dashboard widgets.

pub mod footer;
pub mod menu;
