//! Application-level configuration.
//!
//! Controls how the upload use case behaves around the external call.

use std::time::Duration;

/// Application behavior configuration.
///
/// By default there is no timeout: the external call is a single blocking
/// attempt.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the model before failing the interaction.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// `None` and `Some(0)` both mean no timeout.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert!(BehaviorConfig::default().timeout.is_none());
    }

    #[test]
    fn test_zero_means_no_timeout() {
        assert!(BehaviorConfig::from_timeout_seconds(Some(0)).timeout.is_none());
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(30)).timeout,
            Some(Duration::from_secs(30))
        );
    }
}
