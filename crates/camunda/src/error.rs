use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("engine returned {status}: {body}")]
    Api { status: u16, body: String },
}

impl EngineError {
    /// Status code of an API-level rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            EngineError::Api { status, .. } => Some(*status),
            EngineError::Http(_) => None,
        }
    }
}
