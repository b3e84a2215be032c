//! Errors raised by the bounded containers

use std::fmt;

/// Refusal from a queue or stack primitive. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// Insert into a container already at capacity
    CapacityExceeded,
    /// Removal from a container holding nothing
    Empty,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::CapacityExceeded => f.write_str("container is at capacity"),
            ContainerError::Empty => f.write_str("container is empty"),
        }
    }
}

impl std::error::Error for ContainerError {}
