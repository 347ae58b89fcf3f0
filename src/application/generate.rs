//! Generate calendar use case

use crate::domain::layout::{day_title, recap_link, recap_title};
use crate::domain::{is_leap_year, load_template, CalendarLayout, Month, TemplateKind, MONTHS};
use crate::error::Result;
use crate::infrastructure::{CalendarRepository, DirStatus, FileSystemRepository, GeneratorConfig};
use std::path::Path;
use tracing::debug;

/// Counts reported after a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_written: usize,
}

/// Service that writes a whole year of notes
pub struct GenerateCalendarService {
    repository: FileSystemRepository,
    config: GeneratorConfig,
}

impl GenerateCalendarService {
    pub fn new(config: GeneratorConfig) -> Self {
        GenerateCalendarService {
            repository: FileSystemRepository::new(config.output_dir.clone()),
            config,
        }
    }

    /// Build the `<year>_Calendar` tree. Stops at the first error;
    /// whatever was written before it stays on disk.
    pub fn execute(&self) -> Result<GenerationSummary> {
        let layout = CalendarLayout::new(self.repository.root(), self.config.year);
        let mut summary = GenerationSummary::default();

        debug!(
            year = self.config.year,
            output = %layout.year_dir().display(),
            "generating calendar"
        );
        if is_leap_year(self.config.year) {
            debug!("{} is a leap year!", self.config.year);
        } else {
            debug!("{} is not a leap year!", self.config.year);
        }

        self.ensure_dir(&layout.year_dir(), &mut summary)?;
        self.repository.write_file(&layout.year_recap_file(), "")?;
        summary.files_written += 1;

        for month in MONTHS.iter() {
            self.ensure_dir(&layout.month_dir(month), &mut summary)?;
            self.ensure_dir(&layout.days_dir(month), &mut summary)?;
            self.write_month_file(&layout, month)?;
            summary.files_written += 1;
            summary.files_written += self.write_day_files(&layout, month)?;
        }

        debug!(
            directories_created = summary.directories_created,
            directories_existing = summary.directories_existing,
            files_written = summary.files_written,
            "calendar generated"
        );

        Ok(summary)
    }

    fn ensure_dir(&self, path: &Path, summary: &mut GenerationSummary) -> Result<()> {
        match self.repository.ensure_dir(path)? {
            DirStatus::Created => summary.directories_created += 1,
            DirStatus::AlreadyExists => summary.directories_existing += 1,
        }
        Ok(())
    }

    /// Write `<MonthName> Recap.md`, linking back to the year recap
    fn write_month_file(&self, layout: &CalendarLayout, month: &Month) -> Result<()> {
        let template = load_template(&self.config.templates_dir, TemplateKind::Month)?;
        let content = template.render(
            &recap_title(month.name),
            &recap_link(&layout.year().to_string()),
        );
        self.repository
            .write_file(&layout.month_recap_file(month), &content)
    }

    /// Write one `YYYY-MM-DD.md` per day of the month, each linking back
    /// to the month recap. Returns the number of files written.
    fn write_day_files(&self, layout: &CalendarLayout, month: &Month) -> Result<usize> {
        let template = load_template(&self.config.templates_dir, TemplateKind::Day)?;
        let link = recap_link(month.name);
        let dates = month.dates(layout.year())?;

        for date in &dates {
            debug!("Creating day {}", date);
            let content = template.render(&day_title(*date), &link);
            self.repository
                .write_file(&layout.day_file(month, *date), &content)?;
        }

        Ok(dates.len())
    }
}
