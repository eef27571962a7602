use std::fmt::{Display, Formatter};
use std::str::Utf8Error;

#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    Utf8Error(Utf8Error),
    DeserializationError(ron::error::SpannedError),
}

impl From<ron::error::SpannedError> for LoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        LoadError::DeserializationError(e)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(ioe: std::io::Error) -> Self {
        LoadError::IoError(ioe)
    }
}

impl From<std::str::Utf8Error> for LoadError {
    fn from(ue: Utf8Error) -> Self {
        LoadError::Utf8Error(ue)
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for LoadError {}
