//! Domain layer - Calendar model, naming and templates

pub mod calendar;
pub mod layout;
pub mod template;

pub use calendar::{is_leap_year, leap_year_days, DayCount, Month, MONTHS};
pub use layout::CalendarLayout;
pub use template::{load_template, Template, TemplateKind};
