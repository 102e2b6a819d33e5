//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TODOAPP_DATA_DIR`.
//! 2. **Config file**: the TOML file passed to [`TodoConfig::load`], if any.
//! 3. **Defaults**: see the table below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `week_start` | `sunday` | First day of the "This Week" filter (`sunday` or `monday`) |
//! | `data_dir` | OS data dir | Where [`FsBackend`] keeps `projects.json` and `tasks.json` |

use crate::error::Result;
use crate::store::FsBackend;
use crate::view::WeekStart;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for todoapp, stored in `todoapp.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoConfig {
    /// First day of the week for the "This Week" filter.
    /// When absent, weeks start on Sunday.
    pub week_start: Option<WeekStart>,

    /// Directory holding the stored data.
    #[config(env = "TODOAPP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl TodoConfig {
    /// Loads env overrides on top of `file` (a missing file is fine).
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start.unwrap_or_default()
    }

    /// Filesystem backend at `data_dir`, or at the OS data dir when unset.
    pub fn fs_backend(&self) -> Result<FsBackend> {
        match &self.data_dir {
            Some(dir) => Ok(FsBackend::new(dir.clone())),
            None => FsBackend::default_location(),
        }
    }
}
