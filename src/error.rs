//! Error Types

use thiserror::Error;

/// Errors surfaced by tracker operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("Inputs have to be positive numbers!")]
    InvalidInput,
    #[error("Double-click on the map to choose a location first")]
    NoLocation,
    #[error("Could not save workouts: {0}")]
    Storage(#[from] StorageError),
}

/// Failure writing to the key-value store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("write rejected: {0}")]
    Write(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Failure getting the device position
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("Could not get your position")]
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(TrackerError::InvalidInput.to_string(), "Inputs have to be positive numbers!");
        assert_eq!(LocateError::Denied.to_string(), "Could not get your position");
        let err: TrackerError = StorageError::Unavailable.into();
        assert_eq!(err.to_string(), "Could not save workouts: local storage unavailable");
    }
}
