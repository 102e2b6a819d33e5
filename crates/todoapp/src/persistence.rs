//! # Persistence Layer
//!
//! Moves both collections between memory and a [`StorageBackend`].
//!
//! ## Loading
//!
//! [`Persistence::load`] reads the `projects` and `tasks` keys independently,
//! but resets them **jointly**: if either key is absent, holds `null`, or fails
//! to parse, both collections are replaced by the seed dataset and the seed is
//! written back immediately. A surviving `tasks` blob is discarded along with a
//! broken `projects` blob (and vice versa) so tasks never point at projects that
//! do not exist.
//!
//! Malformed data is not an error for the caller; it is logged and healed.
//! Backend failures (I/O, permissions) are errors.
//!
//! ## After Loading
//!
//! The loaded data is still in wire form. [`LoadedData::into_stores`] runs the
//! two mandatory post-load steps (id counter init, date revival) and is the
//! only way to get stores out of a load.

use crate::error::Result;
use crate::model::Project;
use crate::projects::ProjectStore;
use crate::seed::{seed_projects, seed_tasks};
use crate::store::StorageBackend;
use crate::tasks::{StoredTask, TaskStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const PROJECTS_KEY: &str = "projects";
pub const TASKS_KEY: &str = "tasks";

/// Raw result of a load, before counter init and date revival.
#[derive(Debug)]
pub struct LoadedData {
    pub projects: Vec<Project>,
    pub tasks: Vec<StoredTask>,
    /// True when the seed dataset was used (and written).
    pub seeded: bool,
}

impl LoadedData {
    pub fn into_stores(self) -> (ProjectStore, TaskStore) {
        (
            ProjectStore::with_projects(self.projects),
            TaskStore::revive_dates(self.tasks),
        )
    }
}

pub struct Persistence<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self) -> Result<LoadedData> {
        let projects = self.read_key::<Vec<Project>>(PROJECTS_KEY)?;
        let tasks = self.read_key::<Vec<StoredTask>>(TASKS_KEY)?;

        match (projects, tasks) {
            (Some(projects), Some(tasks)) => {
                tracing::debug!(
                    projects = projects.len(),
                    tasks = tasks.len(),
                    "loaded stored data"
                );
                Ok(LoadedData {
                    projects,
                    tasks,
                    seeded: false,
                })
            }
            _ => self.seed(),
        }
    }

    pub fn save_projects(&self, projects: &ProjectStore) -> Result<()> {
        self.write_key(PROJECTS_KEY, projects.items())
    }

    pub fn save_tasks(&self, tasks: &TaskStore) -> Result<()> {
        self.write_key(TASKS_KEY, &tasks.to_stored())
    }

    fn seed(&self) -> Result<LoadedData> {
        let projects = seed_projects();
        let tasks: Vec<StoredTask> = seed_tasks().iter().map(StoredTask::from).collect();

        self.write_key(PROJECTS_KEY, &projects)?;
        self.write_key(TASKS_KEY, &tasks)?;
        tracing::info!(
            projects = projects.len(),
            tasks = tasks.len(),
            "wrote seed data"
        );

        Ok(LoadedData {
            projects,
            tasks,
            seeded: true,
        })
    }

    /// `Ok(None)` for a missing key, a stored `null`, or unparseable content.
    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            tracing::debug!(key, "no stored data");
            return Ok(None);
        };

        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed stored data");
                Ok(None)
            }
        }
    }

    fn write_key<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.backend.set(key, &json)
    }
}
