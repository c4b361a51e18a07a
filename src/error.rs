use thiserror::Error;

/// Failures at the edges of the crate: reading a page and turning its
/// elements into posts. Matching itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// A required `data-*` attribute is absent from a post element
    #[error("post element is missing `{0}`")]
    MissingAttribute(&'static str),

    /// A required attribute exists but cannot be interpreted
    #[error("post element has invalid `{name}`: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
