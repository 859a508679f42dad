use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Corrupted data")]
    Corrupted,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::Corrupted => false,
            SaveError::VersionMismatch { .. } => false,
            _ => false,
        }
    }
}
