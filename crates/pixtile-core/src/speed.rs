//! Animation speed presets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How often the front-end presents a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Time between presented frames.
    pub fn frame_interval(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(33),
            AnimationSpeed::Normal => Duration::from_millis(16),
            AnimationSpeed::Fast => Duration::from_millis(8),
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle_returns_to_start() {
        let start = AnimationSpeed::default();
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_faster_means_shorter_interval() {
        assert!(AnimationSpeed::Fast.frame_interval() < AnimationSpeed::Normal.frame_interval());
        assert!(AnimationSpeed::Normal.frame_interval() < AnimationSpeed::Slow.frame_interval());
    }
}
