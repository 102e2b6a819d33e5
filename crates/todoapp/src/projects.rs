//! # Project Store
//!
//! Owns the ordered project collection and the id counter.
//!
//! Positions are indexes into the collection as it is right now; they shift on
//! removal. Ids are permanent. The counter remembers the highest id seen when
//! the collection was loaded and only ever grows from there, so an id freed by
//! a deletion is not handed out again in the same session.

use crate::error::{Result, TodoError};
use crate::model::{make_project, normalize_project_title, Project, ProjectId};

#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    items: Vec<Project>,
    id_count: ProjectId,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from loaded projects and initializes the id counter.
    pub fn with_projects(items: Vec<Project>) -> Self {
        let mut store = Self { items, id_count: 0 };
        store.init_counter();
        store
    }

    /// Appends a project as-is. Returns its position.
    ///
    /// The id counter is not consulted; use [`Self::create_project`] to mint
    /// new projects.
    pub fn add(&mut self, project: Project) -> usize {
        self.items.push(project);
        self.items.len() - 1
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Project> {
        if position >= self.items.len() {
            return Err(TodoError::out_of_range(
                "project",
                position,
                self.items.len(),
            ));
        }
        Ok(self.items.remove(position))
    }

    /// Sets the counter to the highest id present, or 0 when empty.
    /// Runs once per load; [`Self::with_projects`] calls it for you.
    pub(crate) fn init_counter(&mut self) {
        self.id_count = self.items.iter().map(|p| p.id).max().unwrap_or(0);
    }

    /// Mints the next id, appends a new project with it and returns its position.
    pub fn create_project(&mut self, title: impl Into<String>) -> usize {
        self.id_count += 1;
        let project = make_project(self.id_count, title);
        tracing::debug!(id = project.id, title = %project.title, "created project");
        self.add(project)
    }

    /// Renames in place. Blank titles become [`crate::model::UNTITLED`].
    pub fn rename_at(&mut self, position: usize, title: &str) -> Result<&Project> {
        let len = self.items.len();
        let project = self
            .items
            .get_mut(position)
            .ok_or_else(|| TodoError::out_of_range("project", position, len))?;
        project.title = normalize_project_title(title);
        Ok(project)
    }

    pub fn get(&self, position: usize) -> Option<&Project> {
        self.items.get(position)
    }

    pub fn require(&self, position: usize) -> Result<&Project> {
        self.items
            .get(position)
            .ok_or_else(|| TodoError::out_of_range("project", position, self.items.len()))
    }

    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    pub fn items(&self) -> &[Project] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highest id handed out (or seen at load) so far.
    pub fn id_count(&self) -> ProjectId {
        self.id_count
    }
}
