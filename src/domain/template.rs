//! Boilerplate templates for recap and day notes

use crate::error::{CalendarError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Which kind of note a template seeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Month,
    Day,
}

impl TemplateKind {
    /// File name of this template inside the templates directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Month => "month.txt",
            TemplateKind::Day => "day.txt",
        }
    }
}

/// Template text copied into every generated note of one kind
#[derive(Debug, Clone)]
pub struct Template {
    content: String,
}

impl Template {
    pub fn new(content: impl Into<String>) -> Self {
        Template {
            content: content.into(),
        }
    }

    /// Read a template file; a missing file is reported as `TemplateNotFound`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CalendarError::TemplateNotFound(path.to_path_buf()),
            ErrorKind::InvalidData => CalendarError::Template(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            )),
            _ => CalendarError::Io(e),
        })?;

        Ok(Template { content })
    }

    /// Template content followed directly by `link`.
    ///
    /// A template ending in a newline puts the link on its own line.
    pub fn with_back_link(&self, link: &str) -> String {
        format!("{}{}", self.content, link)
    }

    /// Full note text: title line, then the template with its back-link
    pub fn render(&self, title: &str, link: &str) -> String {
        format!("{}\n{}", title, self.with_back_link(link))
    }
}

/// Path of a template inside `templates_dir`
pub fn template_path(templates_dir: &Path, kind: TemplateKind) -> PathBuf {
    templates_dir.join(kind.file_name())
}

/// Load the template of the given kind from `templates_dir`
pub fn load_template(templates_dir: &Path, kind: TemplateKind) -> Result<Template> {
    Template::from_file(&template_path(templates_dir, kind))
}
