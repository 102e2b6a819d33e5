//! # API Facade
//!
//! The API layer is a **thin facade** over the stores, the persistence layer
//! and the view engine. It is the single entry point a renderer talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** state once, running the mandatory post-load steps
//! - **Dispatches** to Project Store / Task Store operations
//! - **Persists** every mutation before returning. A failed write leaves the
//!   in-memory stores as they were
//! - **Returns structured types**, never strings for display
//!
//! ## What the API Does NOT Do
//!
//! - **Rendering**: No DOM, no terminal output
//! - **Confirmation**: Asking "are you sure?" before a delete is the caller's job.
//!   By the time a destructive method is called, the user has agreed.
//! - **Form validation UI**: Blank titles are rejected here too, but surfacing
//!   that to the user belongs to the form layer
//!
//! ## Generic Over StorageBackend
//!
//! `TodoApi<B: StorageBackend>` is generic over the durable store:
//! - Production: `TodoApi<FsBackend>`
//! - Testing: `TodoApi<MemBackend>` (or `TodoApi<&MemBackend>` to keep a handle)

use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::model::{make_task, Project, Task, TaskFields};
use crate::persistence::Persistence;
use crate::projects::ProjectStore;
use crate::store::StorageBackend;
use crate::tasks::TaskStore;
use crate::view::{compute_view, Selection, SortDirective, View, WeekStart};
use chrono::{DateTime, Local};

/// What a project deletion removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedProject {
    pub project: Project,
    pub removed_tasks: usize,
}

pub struct TodoApi<B: StorageBackend> {
    persistence: Persistence<B>,
    projects: ProjectStore,
    tasks: TaskStore,
    week_start: WeekStart,
}

impl<B: StorageBackend> TodoApi<B> {
    /// Loads (or seeds) stored state with default settings.
    pub fn load(backend: B) -> Result<Self> {
        Self::load_with_config(backend, &TodoConfig::default())
    }

    pub fn load_with_config(backend: B, config: &TodoConfig) -> Result<Self> {
        let persistence = Persistence::new(backend);
        let (projects, tasks) = persistence.load()?.into_stores();
        Ok(Self {
            persistence,
            projects,
            tasks,
            week_start: config.week_start(),
        })
    }

    pub fn backend(&self) -> &B {
        self.persistence.backend()
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    // --- Projects ---

    /// Creates a project and returns its position.
    pub fn create_project(&mut self, title: &str) -> Result<usize> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        let mut projects = self.projects.clone();
        let position = projects.create_project(title);
        self.commit_projects(projects)?;
        Ok(position)
    }

    /// Deletes a project and every task it owns.
    ///
    /// Tasks are written before projects, so a failure part way leaves at
    /// worst a project with fewer tasks on disk, never orphaned tasks.
    pub fn remove_project_at(&mut self, position: usize) -> Result<RemovedProject> {
        if self.projects.require(position)?.is_default() {
            return Err(TodoError::DefaultProjectProtected);
        }

        let mut projects = self.projects.clone();
        let mut tasks = self.tasks.clone();
        let project = projects.remove_at(position)?;
        let removed_tasks = tasks.remove_all_for_project(project.id);

        self.persistence.save_tasks(&tasks)?;
        if let Err(err) = self.persistence.save_projects(&projects) {
            if let Err(restore_err) = self.persistence.save_tasks(&self.tasks) {
                tracing::warn!(error = %restore_err, "could not restore tasks after failed project delete");
            }
            return Err(err);
        }

        tracing::debug!(id = project.id, removed_tasks, "removed project");
        self.projects = projects;
        self.tasks = tasks;
        Ok(RemovedProject {
            project,
            removed_tasks,
        })
    }

    /// Renames a project. A blank title becomes "Untitled".
    pub fn rename_project(&mut self, position: usize, title: &str) -> Result<&Project> {
        if self.projects.require(position)?.is_default() {
            return Err(TodoError::DefaultProjectProtected);
        }
        let mut projects = self.projects.clone();
        projects.rename_at(position, title)?;
        self.commit_projects(projects)?;
        self.projects.require(position)
    }

    // --- Tasks ---

    /// Adds a task to the project at `project_position`. Returns the task's position.
    pub fn add_task(&mut self, project_position: usize, fields: TaskFields) -> Result<usize> {
        let project_id = self.projects.require(project_position)?.id;
        if fields.title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let task = make_task(
            fields.title,
            fields.details,
            fields.date,
            fields.priority,
            project_id,
        );
        let mut tasks = self.tasks.clone();
        let position = tasks.add(task);
        self.commit_tasks(tasks)?;
        tracing::debug!(position, project_id, "added task");
        Ok(position)
    }

    pub fn remove_task_at(&mut self, position: usize) -> Result<Task> {
        let mut tasks = self.tasks.clone();
        let task = tasks.remove_at(position)?;
        self.commit_tasks(tasks)?;
        Ok(task)
    }

    /// Flips completion and returns the new state.
    pub fn toggle_task_completed(&mut self, position: usize) -> Result<bool> {
        let mut tasks = self.tasks.clone();
        let completed = tasks.toggle_completed(position)?;
        self.commit_tasks(tasks)?;
        Ok(completed)
    }

    pub fn edit_task(&mut self, position: usize, fields: TaskFields) -> Result<&Task> {
        self.tasks.require(position)?;
        if fields.title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        let mut tasks = self.tasks.clone();
        tasks.edit_at(position, fields)?;
        self.commit_tasks(tasks)?;
        self.tasks.require(position)
    }

    // Mutations are staged on a copy; memory only changes once the write lands.

    fn commit_projects(&mut self, projects: ProjectStore) -> Result<()> {
        self.persistence.save_projects(&projects)?;
        self.projects = projects;
        Ok(())
    }

    fn commit_tasks(&mut self, tasks: TaskStore) -> Result<()> {
        self.persistence.save_tasks(&tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    // --- Views ---

    pub fn get_view(&self, selection: Selection, sort: SortDirective) -> Result<View<'_>> {
        self.get_view_at(selection, sort, Local::now())
    }

    /// [`Self::get_view`] with an explicit clock.
    pub fn get_view_at(
        &self,
        selection: Selection,
        sort: SortDirective,
        now: DateTime<Local>,
    ) -> Result<View<'_>> {
        compute_view(
            &self.projects,
            &self.tasks,
            selection,
            sort,
            self.week_start,
            now,
        )
    }

    /// Heading for the selection: the filter name or the project title.
    pub fn selection_title(&self, selection: Selection) -> Result<&str> {
        match selection {
            Selection::Project(position) => Ok(self.projects.require(position)?.title.as_str()),
            Selection::DateFilter(filter) => Ok(filter.label()),
        }
    }
}
