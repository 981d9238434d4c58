use std::fmt;

#[derive(Debug, PartialEq)]
pub enum KitchenError {
    FileReaderError,
    ParseError(String),
    UnknownDish(String),
    EmptyQueueWhenNotExpected,
}

impl fmt::Display for KitchenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitchenError::FileReaderError => write!(f, "could not open the kitchen file"),
            KitchenError::ParseError(reason) => write!(f, "invalid kitchen file: {}", reason),
            KitchenError::UnknownDish(name) => write!(f, "station references unknown dish '{}'", name),
            KitchenError::EmptyQueueWhenNotExpected => write!(f, "orders queue was empty"),
        }
    }
}

impl std::error::Error for KitchenError {}

impl From<serde_json::Error> for KitchenError {
    fn from(error: serde_json::Error) -> Self {
        KitchenError::ParseError(error.to_string())
    }
}
