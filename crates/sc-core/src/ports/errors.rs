use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardReadError {
    #[error("clipboard backend unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard read failed: {0}")]
    Backend(String),
}
