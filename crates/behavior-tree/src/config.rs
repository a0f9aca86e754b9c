//! Tree runtime configuration.
use std::env;
use std::time::Duration;

/// Settings applied when a [`TreeBuilder`](crate::TreeBuilder) builds a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Minimum time between two evaluations of the root.
    pub min_interval: Duration,
}

impl TreeConfig {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BT_MIN_INTERVAL_MS` - Minimum re-evaluation interval in milliseconds (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("BT_MIN_INTERVAL_MS") {
            config.min_interval = Duration::from_millis(ms);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
