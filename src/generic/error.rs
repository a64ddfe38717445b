use std::fmt::Display;

use serde::Serialize;

/// Contract violations of the board and the arbiter.
///
/// These point at a bug in the caller, there is nothing to retry.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A cell index outside of 0..=8.
    IndexOutOfRange { index: usize },
    /// A win check was requested for [`crate::Field::Vacant`].
    InvalidArgument,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::IndexOutOfRange { index } => {
                write!(f, "cell index {} is out of range 0..=8", index)
            }
            ErrorKind::InvalidArgument => write!(f, "can not check a win for a vacant field"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Serialized data that does not describe a valid board or line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The grid is not 3x3.
    InvalidShape { shape: Vec<usize> },
    /// The cells are not one of the winning lines.
    UnknownLine { cells: [usize; 3] },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidShape { shape } => {
                write!(f, "expected a 3x3 board, got shape {:?}", shape)
            }
            DecodeError::UnknownLine { cells } => {
                write!(f, "{:?} is not a winning line", cells)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
