//! Geolocation seam.
//!
//! Coordinate lookups go through [`PositionProvider`] so the dashboard can
//! be driven by a platform backend where one exists and by a fake in tests.
//! Availability is checked before any position request is attempted.

use async_trait::async_trait;

use crate::types::Coordinates;

/// Geolocation errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation not supported on this platform")]
    Unsupported,
    #[error("Location permission denied")]
    Denied,
    #[error("Location service unavailable")]
    Unavailable,
    #[error("Location request timed out")]
    Timeout,
}

/// Single-shot position source.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Whether a position backend exists at all. Callers check this before
    /// requesting a position and report "not supported" when it is false.
    fn is_available(&self) -> bool;

    /// Resolve the current position once.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Default provider; no platform backend is wired up yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPositionProvider;

#[async_trait]
impl PositionProvider for SystemPositionProvider {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_provider_reports_unsupported() {
        let provider = SystemPositionProvider;
        assert!(!provider.is_available());
        assert!(matches!(
            provider.current_position().await,
            Err(LocationError::Unsupported)
        ));
    }
}
