//! Rendering collaborator
//!
//! The simulation never draws. The session controller hands a [`FrameView`]
//! to a [`Renderer`] once per tick, plus the intro and terminal screens.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use headless::HeadlessRenderer;

use crate::sim::{Ball, Brick};

/// Shown while a session is starting
pub const INTRO_MESSAGE: &str = "Press [<] and [>]";
/// Shown when every brick is gone
pub const WIN_MESSAGE: &str = "CONGRATULATIONS";
/// Shown when the ball drops past the paddle
pub const LOSS_MESSAGE: &str = "GAME OVER";

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Paddle centre x
    pub paddle_x: f32,
    pub ball: &'a Ball,
    pub ball_radius: f32,
    pub bricks: &'a [Brick],
    pub score: u64,
}

/// Draws game state onto a surface
pub trait Renderer {
    fn draw_intro(&mut self);
    fn draw_frame(&mut self, frame: &FrameView<'_>);
    fn draw_terminal(&mut self, message: &str);
}
