//! # Task Store
//!
//! Owns the ordered task collection. Like projects, tasks are addressed by
//! position, and positions shift on removal.
//!
//! ## Wire Form and Date Revival
//!
//! On disk a task is a [`StoredTask`]: the date is a string (or `null`).
//! [`TaskStore::revive_dates`] is the one place that string becomes a
//! `DateTime<Local>` again, so a freshly loaded store is always fully typed
//! before any view computation can see it.
//!
//! Accepted stored date forms:
//! - RFC 3339, e.g. `2025-12-28T00:00:00.000+01:00` or `2025-12-28T05:00:00.000Z`
//! - Local wall-clock `YYYY-MM-DD HH:MM`
//!
//! A non-null date that matches neither is logged and dropped to `None`.

use crate::error::{Result, TodoError};
use crate::model::{Priority, ProjectId, Task, TaskFields};
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

/// A task as persisted under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub title: String,
    #[serde(default)]
    pub details: String,
    pub date: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "projectIndex")]
    pub project_id: ProjectId,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            details: task.details.clone(),
            date: task.date.map(format_stored_date),
            priority: task.priority,
            completed: task.completed,
            project_id: task.project_id,
        }
    }
}

pub fn format_stored_date(date: DateTime<Local>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub fn parse_stored_date(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .ok()?
        .and_local_timezone(Local)
        .earliest()
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    items: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(items: Vec<Task>) -> Self {
        Self { items }
    }

    /// Turns freshly deserialized records into a store, parsing every
    /// non-null date. Null dates stay `None`.
    pub fn revive_dates(records: Vec<StoredTask>) -> Self {
        let items = records
            .into_iter()
            .map(|record| {
                let date = record.date.as_deref().and_then(|raw| {
                    let parsed = parse_stored_date(raw);
                    if parsed.is_none() {
                        tracing::warn!(title = %record.title, date = raw, "dropping unparseable task date");
                    }
                    parsed
                });
                Task {
                    title: record.title,
                    details: record.details,
                    date,
                    priority: record.priority,
                    completed: record.completed,
                    project_id: record.project_id,
                }
            })
            .collect();
        Self { items }
    }

    pub fn to_stored(&self) -> Vec<StoredTask> {
        self.items.iter().map(StoredTask::from).collect()
    }

    pub fn add(&mut self, task: Task) -> usize {
        self.items.push(task);
        self.items.len() - 1
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Task> {
        if position >= self.items.len() {
            return Err(TodoError::out_of_range("task", position, self.items.len()));
        }
        Ok(self.items.remove(position))
    }

    /// Drops every task owned by `project_id`, keeping the rest in order.
    /// Returns how many were removed.
    pub fn remove_all_for_project(&mut self, project_id: ProjectId) -> usize {
        let before = self.items.len();
        self.items.retain(|task| task.project_id != project_id);
        before - self.items.len()
    }

    /// Flips `completed` and returns the new value.
    pub fn toggle_completed(&mut self, position: usize) -> Result<bool> {
        let task = self.get_mut(position)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Replaces the editable fields; completion and owner are kept.
    pub fn edit_at(&mut self, position: usize, fields: TaskFields) -> Result<&Task> {
        let task = self.get_mut(position)?;
        task.apply(fields);
        Ok(task)
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.items.get(position)
    }

    pub fn require(&self, position: usize) -> Result<&Task> {
        self.items
            .get(position)
            .ok_or_else(|| TodoError::out_of_range("task", position, self.items.len()))
    }

    fn get_mut(&mut self, position: usize) -> Result<&mut Task> {
        let len = self.items.len();
        self.items
            .get_mut(position)
            .ok_or_else(|| TodoError::out_of_range("task", position, len))
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
