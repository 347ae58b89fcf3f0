//! Application layer - Use cases and orchestration

pub mod generate;

pub use generate::{GenerateCalendarService, GenerationSummary};
