//! # Domain Model: Projects and Tasks
//!
//! This module defines the two record types the rest of the crate moves around,
//! [`Project`] and [`Task`], plus the plain factories that build them.
//!
//! ## Projects
//!
//! A project is just `{ id, title }`. Ids are minted by
//! [`crate::projects::ProjectStore::create_project`] and never reused within a
//! session. The project with id [`DEFAULT_PROJECT_ID`] ("Home") always exists
//! and is protected from deletion and renaming.
//!
//! ## Tasks
//!
//! A task references its owner through `project_id`, which is the project's
//! **id**, not its position in the project list. On the wire this field keeps
//! its historical name `projectIndex` (see [`crate::tasks::StoredTask`]).
//!
//! The due date is optional. A missing date means "no due date" and is never
//! coerced to some invalid placeholder.
//!
//! ## Form Input
//!
//! Date inputs arrive as `YYYY-MM-DD` strings. [`parse_form_date`] turns them
//! into local midnight; anything unparseable becomes `None`. That is a
//! normalization, not an error.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub type ProjectId = u32;

/// Id of the permanent "Home" project.
pub const DEFAULT_PROJECT_ID: ProjectId = 0;

/// Title given to a project renamed to an empty string.
pub const UNTITLED: &str = "Untitled";

/// Label used for tasks without a due date.
pub const NO_DATE_LABEL: &str = "No Date";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
}

impl Project {
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PROJECT_ID
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub title: String,
    pub details: String,
    pub date: Option<DateTime<Local>>,
    pub priority: Priority,
    pub completed: bool,
    pub project_id: ProjectId,
}

impl Task {
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }

    /// A dated task whose date has passed and is not today.
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        match self.date {
            Some(date) => date < now && date.date_naive() != now.date_naive(),
            None => false,
        }
    }

    /// Human label for the due date, e.g. `Sun Dec 28, 2025`.
    pub fn due_label(&self) -> String {
        match self.date {
            Some(date) => date.format("%a %b %d, %Y").to_string(),
            None => NO_DATE_LABEL.to_string(),
        }
    }

    pub(crate) fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.details = fields.details;
        self.date = fields.date;
        self.priority = fields.priority;
    }
}

/// Editable task fields, as collected by a new/edit task form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFields {
    pub title: String,
    pub details: String,
    pub date: Option<DateTime<Local>>,
    pub priority: Priority,
}

impl TaskFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn date(mut self, date: Option<DateTime<Local>>) -> Self {
        self.date = date;
        self
    }

    /// Sets the date from raw form input. Invalid input clears the date.
    pub fn date_input(mut self, raw: &str) -> Self {
        self.date = parse_form_date(raw);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

pub fn make_project(id: ProjectId, title: impl Into<String>) -> Project {
    Project {
        id,
        title: title.into(),
    }
}

pub fn make_task(
    title: impl Into<String>,
    details: impl Into<String>,
    date: Option<DateTime<Local>>,
    priority: Priority,
    project_id: ProjectId,
) -> Task {
    Task {
        title: title.into(),
        details: details.into(),
        date,
        priority,
        completed: false,
        project_id,
    }
}

/// Parses a `YYYY-MM-DD` form value into local midnight of that day.
pub fn parse_form_date(raw: &str) -> Option<DateTime<Local>> {
    let day = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    day.and_hms_opt(0, 0, 0)?
        .and_local_timezone(Local)
        .earliest()
}

/// Coerces a user-supplied project title: trimmed, and never empty.
pub fn normalize_project_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}
