use std::fmt;

#[derive(Debug)]
pub enum DraftError {
    InvalidTeamCount { min: usize, max: usize, found: usize },
    EmptyColorList,
}

#[derive(Debug)]
pub enum CoreError {
    InvalidParameter(String),
    NotFound(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DraftError::InvalidTeamCount { min, max, found } => {
                write!(f, "Invalid team count: expected {}..={}, found {}", min, max, found)
            }
            DraftError::EmptyColorList => {
                write!(f, "Color list must not be empty")
            }
        }
    }
}

impl std::error::Error for DraftError {}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoreError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::DeserializationError(err.to_string())
        } else {
            CoreError::SerializationError(err.to_string())
        }
    }
}

impl From<DraftError> for CoreError {
    fn from(err: DraftError) -> Self {
        CoreError::InvalidParameter(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
