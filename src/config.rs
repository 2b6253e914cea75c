//! Game configuration
//!
//! Every tunable lives here so the simulation can be exercised on any stage size.
//! Partial JSON overrides the defaults field by field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Narrowest brick a grid may produce (pixels)
const MIN_BRICK_WIDTH: f32 = 1.0;

/// Configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Stage ===
    pub stage_width: f32,
    pub stage_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Initial direction vector (not normalized)
    pub ball_direction: (f32, f32),

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_offset: f32,
    pub brick_score: u64,

    // === Timing ===
    pub target_fps: f64,
    pub max_delta_secs: f32,
    pub restart_delay_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stage_width: STAGE_WIDTH,
            stage_height: STAGE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_direction: BALL_START_DIRECTION,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_score: BRICK_SCORE,

            target_fps: TARGET_FPS,
            max_delta_secs: MAX_DELTA_SECS,
            restart_delay_ms: RESTART_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Nominal interval between ticks (ms)
    pub fn tick_interval_ms(&self) -> f64 {
        (1000.0 / self.target_fps).ceil()
    }

    /// Width of a single brick given the column count and gaps
    pub fn brick_width(&self) -> f32 {
        let columns = self.brick_columns as f32;
        (self.stage_width - self.brick_gap - self.brick_gap * columns) / columns
    }

    /// Leftmost and rightmost paddle centre positions
    pub fn paddle_bounds(&self) -> (f32, f32) {
        let half = self.paddle_width / 2.0;
        (half, self.stage_width - half)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("stage_width", self.stage_width),
            ("stage_height", self.stage_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_height", self.brick_height),
            ("max_delta_secs", self.max_delta_secs),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("brick_gap", self.brick_gap),
            ("brick_top_offset", self.brick_top_offset),
            ("ball_direction.x", self.ball_direction.0.abs()),
            ("ball_direction.y", self.ball_direction.1.abs()),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if !self.restart_delay_ms.is_finite() || self.restart_delay_ms < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "restart_delay_ms must be non-negative, got {}",
                self.restart_delay_ms
            )));
        }
        if self.paddle_width > self.stage_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds stage_width {}",
                self.paddle_width, self.stage_width
            )));
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::Invalid(
                "brick grid needs at least one row and one column".to_string(),
            ));
        }
        if self.brick_rows.checked_mul(self.brick_columns).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} x {} brick grid is too large",
                self.brick_rows, self.brick_columns
            )));
        }
        if self.brick_width() < MIN_BRICK_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "{} columns with gap {} leave no room for bricks",
                self.brick_columns, self.brick_gap
            )));
        }
        let band_top = self.stage_height - self.paddle_height - self.ball_radius / 2.0;
        if self.brick_grid_bottom() >= band_top {
            return Err(ConfigError::Invalid(format!(
                "brick grid reaches y = {}, past the paddle band at {}",
                self.brick_grid_bottom(),
                band_top
            )));
        }
        if self.stage_height / 2.0 > self.stage_height - self.ball_radius {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} starts the ball past the floor",
                self.ball_radius
            )));
        }
        if self.brick_score == 0 {
            return Err(ConfigError::Invalid("brick_score must be positive".to_string()));
        }
        Ok(())
    }

    /// Bottom edge of the lowest brick row
    pub fn brick_grid_bottom(&self) -> f32 {
        self.brick_top_offset + self.brick_rows as f32 * (self.brick_height + self.brick_gap)
    }

    /// Element id of the inline JSON config block
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "breakout-config";

    /// Load config from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from #{}", Self::CONFIG_ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring page config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Load config from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
