//! Demo loop configuration.
use std::env;
use std::time::Duration;

/// Settings for the simulated frame loop.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Number of frames to simulate.
    pub frames: u32,
    /// Time that passes per frame.
    pub frame: Duration,
}

impl DemoConfig {
    /// Construct demo configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BT_DEMO_FRAMES` - Frames to simulate (default: 60)
    /// - `BT_DEMO_FRAME_MS` - Milliseconds per frame (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(frames) = read_env::<u32>("BT_DEMO_FRAMES") {
            config.frames = frames;
        }
        if let Some(ms) = read_env::<u64>("BT_DEMO_FRAME_MS") {
            config.frame = Duration::from_millis(ms.max(1));
        }

        config
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            frame: Duration::from_millis(16),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
