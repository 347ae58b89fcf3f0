//! Folder and file naming for a generated calendar

use crate::domain::calendar::Month;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Name of the per-month folder holding the day notes
pub const DAYS_DIR: &str = "Days";

/// Title of a recap note, which doubles as its link target
pub fn recap_title(name: &str) -> String {
    format!("{} Recap", name)
}

/// Wiki-style link to a recap note, e.g. `[[January Recap]].`
pub fn recap_link(name: &str) -> String {
    format!("[[{}]].", recap_title(name))
}

/// Title of a day note (`YYYY-MM-DD`), also its file stem
pub fn day_title(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Resolves every path of a calendar rooted at `root` for one year
#[derive(Debug, Clone)]
pub struct CalendarLayout {
    root: PathBuf,
    year: i32,
}

impl CalendarLayout {
    pub fn new(root: &Path, year: i32) -> Self {
        CalendarLayout {
            root: root.to_path_buf(),
            year,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `<root>/<year>_Calendar`
    pub fn year_dir(&self) -> PathBuf {
        self.root.join(format!("{}_Calendar", self.year))
    }

    /// `<year>_Calendar/<year> Recap.md`
    pub fn year_recap_file(&self) -> PathBuf {
        self.year_dir()
            .join(format!("{}.md", recap_title(&self.year.to_string())))
    }

    /// `<year>_Calendar/<MonthName>`
    pub fn month_dir(&self, month: &Month) -> PathBuf {
        self.year_dir().join(month.name)
    }

    /// `<year>_Calendar/<MonthName>/Days`
    pub fn days_dir(&self, month: &Month) -> PathBuf {
        self.month_dir(month).join(DAYS_DIR)
    }

    /// `<year>_Calendar/<MonthName>/<MonthName> Recap.md`
    pub fn month_recap_file(&self, month: &Month) -> PathBuf {
        self.month_dir(month)
            .join(format!("{}.md", recap_title(month.name)))
    }

    /// `<year>_Calendar/<MonthName>/Days/YYYY-MM-DD.md`
    pub fn day_file(&self, month: &Month, date: NaiveDate) -> PathBuf {
        self.days_dir(month).join(format!("{}.md", day_title(date)))
    }
}
