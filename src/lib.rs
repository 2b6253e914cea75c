//! Breakout - A browser brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, score)
//! - `input`: Key transitions folded into a single direction signal
//! - `clock`: Frame ticks paced to the display refresh
//! - `paddle`: Paddle position integration and clamping
//! - `session`: Session lifecycle (intro, playing, terminal, restart)
//! - `render`: Renderer collaborator trait and implementations
//! - `config`: Data-driven game tunables

pub mod autopilot;
pub mod clock;
pub mod config;
pub mod input;
pub mod paddle;
pub mod render;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{SessionController, SessionEvent};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Stage dimensions (pixels, y grows downward)
    pub const STAGE_WIDTH: f32 = 480.0;
    pub const STAGE_HEIGHT: f32 = 320.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Multiplier applied to the (unnormalized) ball direction per second
    pub const BALL_SPEED: f32 = 60.0;
    pub const BALL_START_DIRECTION: (f32, f32) = (2.0, 2.0);

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 7;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 3.0;
    /// Empty band above the first brick row (room for the score)
    pub const BRICK_TOP_OFFSET: f32 = 20.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Target tick rate; the tick interval is ceil(1000 / TARGET_FPS) ms
    pub const TARGET_FPS: f64 = 60.0;
    /// Largest delta a single tick may integrate (seconds)
    pub const MAX_DELTA_SECS: f32 = 0.1;
    /// Pause between a terminal outcome and the next session (ms)
    pub const RESTART_DELAY_MS: f64 = 1000.0;
}
