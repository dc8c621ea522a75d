use std::fmt;

use super::TeacherId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownTeacher(TeacherId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTeacher(id) => write!(f, "No teacher with ID {id}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
