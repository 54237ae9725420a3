//! Error types used by the call-site services and the data store.
//!
//! This module defines the domain error enums:
//!
//! - [`DispatchError`] — driver assignment failures.
//! - [`MenuError`] — partner menu fetch failures.
//! - [`NotifyError`] — notification delivery failures.
//! - [`CatalogError`] — static reference data loading failures.
//!
//! The retryable/fatal split lives on the error types themselves
//! (`is_retryable`), and each enum provides `as_label` for logs/metrics.
//! The retry layer itself stays generic: executors take the classification
//! as a predicate, and call sites plug these methods in.

use thiserror::Error;

/// # Errors produced by driver assignment.
///
/// Only [`DispatchError::NoDriversAvailable`] is transient; everything else
/// ends the execution immediately.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No driver is currently free in the area; a later attempt may find one.
    #[error("no drivers available in area")]
    NoDriversAvailable,

    /// The order cannot be dispatched at all (e.g. blank identifier).
    #[error("invalid order: {reason}")]
    InvalidOrder {
        /// What made the order undispatchable.
        reason: String,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::NoDriversAvailable => "no_drivers_available",
            DispatchError::InvalidOrder { .. } => "invalid_order",
        }
    }

    /// Indicates whether the error is safe to retry.
    ///
    /// # Example
    /// ```
    /// use ordervisor::DispatchError;
    ///
    /// assert!(DispatchError::NoDriversAvailable.is_retryable());
    /// assert!(!DispatchError::InvalidOrder { reason: "blank id".into() }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, DispatchError::NoDriversAvailable)
    }
}

/// # Errors produced by the partner menu fetch.
///
/// The partner API surfaces every upstream problem — flaky transport and
/// unknown restaurants alike — as [`MenuError::Upstream`], and that whole
/// kind is transient. Only malformed input is fatal.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The partner API is temporarily unavailable (covers "restaurant not
    /// found" responses as well).
    #[error("partner restaurant api unavailable: {reason}")]
    Upstream {
        /// Upstream failure detail.
        reason: String,
    },

    /// The restaurant identifier is malformed (e.g. blank).
    #[error("invalid restaurant id: {id:?}")]
    InvalidRestaurantId {
        /// The offending identifier.
        id: String,
    },
}

impl MenuError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            MenuError::Upstream { .. } => "partner_unavailable",
            MenuError::InvalidRestaurantId { .. } => "invalid_restaurant_id",
        }
    }

    /// Indicates whether the error is safe to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MenuError::Upstream { .. })
    }
}

/// # Errors produced by notification delivery.
///
/// The notification path is gate-limited but never retried; a delivery error
/// propagates to the caller unchanged after the permit is released.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The delivery channel rejected or lost the notification.
    #[error("notification delivery failed: {reason}")]
    Delivery {
        /// Channel failure detail.
        reason: String,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Delivery { .. } => "notify_delivery_failed",
        }
    }
}

/// # Errors produced while loading static reference data.
///
/// Raised once at startup; there is nothing to retry.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A data file could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// A data file is not valid JSON for the expected shape.
    #[error("malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CatalogError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            CatalogError::Io(_) => "catalog_io",
            CatalogError::Malformed(_) => "catalog_malformed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_classification() {
        assert!(DispatchError::NoDriversAvailable.is_retryable());
        assert!(
            !DispatchError::InvalidOrder {
                reason: "blank id".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_menu_classification_covers_not_found() {
        let not_found = MenuError::Upstream {
            reason: "restaurant not found: rest-404".into(),
        };
        assert!(not_found.is_retryable());
        assert!(!MenuError::InvalidRestaurantId { id: "".into() }.is_retryable());
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(DispatchError::NoDriversAvailable.as_label(), "no_drivers_available");
        assert_eq!(
            MenuError::Upstream { reason: "x".into() }.as_label(),
            "partner_unavailable"
        );
        assert_eq!(
            NotifyError::Delivery { reason: "x".into() }.as_label(),
            "notify_delivery_failed"
        );
    }
}
