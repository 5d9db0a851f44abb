//! Errors reported by the inventory store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything an inventory operation can reject or fail with.
///
/// None of these are fatal: the menu shows them as a message and keeps going.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("the fleet is full ({capacity} bicycles)")]
    CapacityExceeded { capacity: usize },

    #[error("unknown bicycle type '{0}' (allowed: city, courier, mountain, flat)")]
    InvalidType(String),

    #[error("location must be a single word without spaces")]
    InvalidLocation(String),

    #[error("there is no bicycle number {index} (fleet has {count})")]
    InvalidIndex { index: usize, count: usize },

    #[error("bicycle {0} is already borrowed")]
    NotAvailable(usize),

    #[error("bicycle {0} is not borrowed")]
    NotBorrowed(usize),

    #[error("failed to write {}: {source}", path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    PersistenceReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InventoryError {
    /// Whether the in-memory store already holds the mutation even though the
    /// call failed (the backing file is stale).
    #[must_use]
    pub const fn is_unsaved_change(&self) -> bool {
        matches!(self, Self::PersistenceWriteFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            InventoryError::InvalidIndex { index: 7, count: 3 }.to_string(),
            "there is no bicycle number 7 (fleet has 3)"
        );
        assert_eq!(
            InventoryError::CapacityExceeded { capacity: 100 }.to_string(),
            "the fleet is full (100 bicycles)"
        );
        assert!(InventoryError::InvalidType("hybrid".into())
            .to_string()
            .contains("'hybrid'"));
    }

    #[test]
    fn test_unsaved_change_flag() {
        let err = InventoryError::PersistenceWriteFailure {
            path: PathBuf::from("/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_unsaved_change());
        assert!(!InventoryError::NotBorrowed(1).is_unsaved_change());
    }
}
