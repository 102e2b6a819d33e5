//! # Storage Layer
//!
//! The app keeps all of its state in a durable string key-value store. This
//! module defines that store as the [`backend::StorageBackend`] trait and ships
//! two implementations.
//!
//! ## Keys
//!
//! Exactly two keys are used, each holding a JSON array:
//!
//! | Key | Content |
//! |-----|---------|
//! | `projects` | `[{ "id": 0, "title": "Home" }, ...]` |
//! | `tasks` | `[{ "title", "details", "date", "priority", "completed", "projectIndex" }, ...]` |
//!
//! The keys are written independently, but [`crate::persistence::Persistence`]
//! always treats them as a pair: if either is missing or malformed, both are
//! reset to seed data.
//!
//! ## Implementations
//!
//! - [`mem_backend::MemBackend`]: For tests and for embedding without disk I/O.
//! - [`fs_backend::FsBackend`]: One file per key, written atomically.
//!
//! ## Storage Layout (FsBackend)
//!
//! ```text
//! <data dir>/
//! ├── projects.json
//! └── tasks.json
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
