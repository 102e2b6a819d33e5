//! # Todoapp Architecture
//!
//! Todoapp is the **UI-agnostic core** of a single-user task manager. Tasks are grouped
//! into projects, carry an optional due date and a priority, and are viewed through
//! project or date-filter selections. A renderer (browser, terminal, anything else)
//! sits on top and only ever talks to [`api::TodoApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: load once, mutate, persist, build views     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain Layer (projects.rs, tasks.rs, view.rs)              │
//! │  - Ordered collections addressed by position                │
//! │  - Pure filter / sort / partition over borrowed tasks       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (persistence.rs, store/)                 │
//! │  - Two JSON keys, jointly reset to the seed when broken     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions and Ids
//!
//! Projects and tasks are addressed by their **position** in insertion order. Positions
//! shift when an earlier item is removed. A project also has a stable numeric `id`
//! which tasks reference; ids are never reused within a session, even after deletes.
//!
//! ## No I/O Assumptions
//!
//! Nothing in this crate writes to stdout. Diagnostics go through `tracing`; see
//! [`logging`] for an opt-in subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`model`]: `Project`, `Task`, `Priority` and their factories
//! - [`projects`] / [`tasks`]: The two ordered stores
//! - [`view`]: Selections, sorting and the completed/uncompleted split
//! - [`persistence`]: Load, seed and save through a backend
//! - [`seed`]: First-run sample data
//! - [`store`]: Storage backends
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod projects;
pub mod seed;
pub mod store;
pub mod tasks;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
