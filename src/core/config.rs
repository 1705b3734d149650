//! Run-time configuration object + fluent builder.

use std::time::Duration;

use crate::core::{
    constants::{DEFAULT_FPS, DEFAULT_MAX_BARS, MAX_BARS, MAX_FPS},
    error::ConfigError,
};

/// Immutable parameters handed to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bars per frame, `1..=15`.
    pub max_bars: usize,
    /// Frames per second, `1..=24`.
    pub fps: u64,
    /// Hold the intro screen until ENTER is pressed.
    pub wait_for_enter: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Pause between two frames.
    #[inline]
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bars: DEFAULT_MAX_BARS,
            fps: DEFAULT_FPS,
            wait_for_enter: true,
        }
    }
}

/// Fluent builder; out-of-range values are clamped, zeros rejected.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_bars: Option<usize>,
    fps: Option<u64>,
    wait_for_enter: Option<bool>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn max_bars(mut self, n: usize) -> Self {
        self.max_bars = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_bars_opt(mut self, n: Option<usize>) -> Self {
        if n.is_some() {
            self.max_bars = n;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn fps(mut self, fps: u64) -> Self {
        self.fps = Some(fps);
        self
    }
    #[inline]
    #[must_use]
    pub fn wait_for_enter(mut self, wait: bool) -> Self {
        self.wait_for_enter = Some(wait);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        let mut max_bars = self.max_bars.unwrap_or(defaults.max_bars);
        if max_bars == 0 {
            return Err(ConfigError::Zero("max_bars"));
        }
        if max_bars > MAX_BARS {
            tracing::warn!(requested = max_bars, "too many bars, using {MAX_BARS}");
            max_bars = MAX_BARS;
        }

        let mut fps = self.fps.unwrap_or(defaults.fps);
        if fps == 0 {
            return Err(ConfigError::Zero("fps"));
        }
        if fps > MAX_FPS {
            tracing::warn!(requested = fps, "animation too fast, using {MAX_FPS} fps");
            fps = MAX_FPS;
        }

        Ok(Config {
            max_bars,
            fps,
            wait_for_enter: self.wait_for_enter.unwrap_or(defaults.wait_for_enter),
        })
    }
}
