use std::path::PathBuf;

/// Errors that stop a download run before any item is attempted
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    /// Two items share an id
    #[error("duplicate dialogue id `{0}`")]
    DuplicateId(&'static str),

    /// An id is empty or cannot be used as a file name
    #[error("dialogue id `{0}` is not filename-safe")]
    InvalidId(&'static str),

    /// An item has no text to synthesize
    #[error("dialogue `{0}` has empty text")]
    EmptyText(&'static str),

    /// The output directory could not be created
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single item; logged and skipped
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    Synthesis(#[from] tts::TtsError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
