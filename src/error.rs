use std::fmt::Debug;
use std::io;

use thiserror::Error;

#[derive(Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid entry.")]
    Entry,

    #[error("expected {expected} digit characters in height, found {found}")]
    Digits { expected: usize, found: usize },

    #[error("height of zero inches")]
    Zero,
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                write!(f, "input ended before the session was complete.")
            }
            _ => std::fmt::Display::fmt(self, f),
        }
    }
}
