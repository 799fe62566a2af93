//! Behavior configuration from TOML (`[behavior]` section)

use mom_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Give up on the model after this many seconds (unset: wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_behavior_config() {
        let config = FileBehaviorConfig {
            timeout_seconds: Some(45),
        };
        assert_eq!(
            config.to_behavior_config().timeout,
            Some(Duration::from_secs(45))
        );
        assert!(FileBehaviorConfig::default().to_behavior_config().timeout.is_none());
    }
}
