//! Renderer that draws nothing and logs instead
//!
//! Used by the native build and by tests that need to see what was drawn.

use super::{FrameView, Renderer};

/// A terminal or intro screen that was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Terminal(String),
}

/// Counts frames and remembers the screens it was asked to show
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub screens: Vec<Screen>,
    pub last_score: u64,
    pub last_paddle_x: Option<f32>,
    pub last_brick_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent terminal message, if any
    pub fn last_terminal(&self) -> Option<&str> {
        self.screens.iter().rev().find_map(|s| match s {
            Screen::Terminal(message) => Some(message.as_str()),
            Screen::Intro => None,
        })
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_intro(&mut self) {
        log::debug!("[intro]");
        self.screens.push(Screen::Intro);
    }

    fn draw_frame(&mut self, frame: &FrameView<'_>) {
        log::trace!(
            "frame {}: ball=({:.1}, {:.1}) paddle={:.1} bricks={} score={}",
            self.frames,
            frame.ball.position.x,
            frame.ball.position.y,
            frame.paddle_x,
            frame.bricks.len(),
            frame.score
        );
        self.frames += 1;
        self.last_score = frame.score;
        self.last_paddle_x = Some(frame.paddle_x);
        self.last_brick_count = frame.bricks.len();
    }

    fn draw_terminal(&mut self, message: &str) {
        log::debug!("[{}] score {}", message, self.last_score);
        self.screens.push(Screen::Terminal(message.to_string()));
    }
}
