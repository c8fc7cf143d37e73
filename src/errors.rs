use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum HeapbenchError {
    #[error("Failed to spawn '{program}': {source}. Is it installed and on $PATH?")]
    SpawnFailure {
        program: String,
        source: std::io::Error,
    },

    #[error("Benchmarked command exited with {status}")]
    NonZeroExit { status: String },

    #[error("Cannot run an empty command")]
    EmptyCommand,

    #[error("Failed to read config file {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParseError { path: PathBuf, detail: String },

    #[error("Heap size must be a positive number of megabytes (got {value})")]
    InvalidHeapSize { value: u32 },

    #[error("Failed to open {path} for child output: {source}")]
    SinkOpenError {
        path: PathBuf,
        source: std::io::Error,
    },
}
