use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{collection} position {position} out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        position: usize,
        len: usize,
    },

    #[error("The default project cannot be deleted or renamed")]
    DefaultProjectProtected,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl TodoError {
    pub(crate) fn out_of_range(collection: &'static str, position: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            position,
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
