//! mdcal - Markdown calendar generator
//!
//! Materializes one calendar year as a tree of linked markdown notes:
//! a folder per month, a recap file per month and one file per day.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::CalendarError;
