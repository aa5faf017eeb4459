use std::{error, fmt, result};

pub mod assignment;
pub mod auth;
pub mod notify;
pub mod schedule;
pub mod search;
pub mod state;
pub mod tour;
pub mod upload;

/// Failures of the management operations. None of these are fatal; the
/// caller surfaces the message and the operator retries by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A referenced participant, bus, location or tour does not exist.
    NotFound,
    /// The target bus is already at (or above) its seating capacity.
    CapacityExceeded { bus: String },
    /// A required input was missing or empty.
    EmptyInput(&'static str),
    /// The selected tour manager is not available for new tours.
    ManagerUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "requested record was not found"),
            Error::CapacityExceeded { bus } => {
                write!(f, "Bus {} is at full capacity", bus)
            }
            Error::EmptyInput(field) => write!(f, "{} is required", field),
            Error::ManagerUnavailable => {
                write!(f, "tour manager is not available")
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;
