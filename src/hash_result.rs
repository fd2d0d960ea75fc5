use std::error::Error;
use std::fmt;
use std::io;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum HashErrorKind {
    // line is not an even-length run of hex digits
    InvalidHex,
    IoFailure,
}

/// An error with a kind and a human-readable description.
#[derive(Debug)]
pub struct HashError {
    pub kind: HashErrorKind,
    pub desc: String,
}

impl HashError {
    pub fn new<T>(kind: HashErrorKind, desc: String) -> HashResult<T> {
        Err(HashError { kind, desc })
    }
}

impl Error for HashError {}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            HashErrorKind::InvalidHex => write!(f, "invalid hex input: {}", self.desc),
            HashErrorKind::IoFailure => write!(f, "i/o error: {}", self.desc),
        }
    }
}

impl From<io::Error> for HashError {
    fn from(err: io::Error) -> HashError {
        HashError {
            kind: HashErrorKind::IoFailure,
            desc: err.to_string(),
        }
    }
}

pub type HashResult<T> = Result<T, HashError>;
