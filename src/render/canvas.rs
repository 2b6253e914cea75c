//! Canvas 2D renderer for the browser

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{FrameView, INTRO_MESSAGE, Renderer};
use crate::config::GameConfig;

const BACKGROUND: &str = "#111";
const FOREGROUND: &str = "#ddd";
const BRICK_COLOR: &str = "#e0663a";
const FONT: &str = "24px Courier New";
const SCORE_FONT: &str = "16px Courier New";

/// Draws onto a `<canvas>` through its 2D context
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    paddle_width: f64,
    paddle_height: f64,
}

impl CanvasRenderer {
    /// Size the canvas to the stage and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, config: &GameConfig) -> Option<Self> {
        use wasm_bindgen::JsCast;

        canvas.set_width(config.stage_width as u32);
        canvas.set_height(config.stage_height as u32);

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            context,
            width: config.stage_width as f64,
            height: config.stage_height as f64,
            paddle_width: config.paddle_width as f64,
            paddle_height: config.paddle_height as f64,
        })
    }

    fn clear(&self) {
        self.context.set_fill_style_str(BACKGROUND);
        self.context.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn centered_text(&self, text: &str) {
        let ctx = &self.context;
        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_font(FONT);
        ctx.set_text_align("center");
        if let Err(e) = ctx.fill_text(text, self.width / 2.0, self.height / 2.0) {
            log::warn!("Text draw failed: {:?}", e);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw_intro(&mut self) {
        self.clear();
        self.centered_text(INTRO_MESSAGE);
    }

    fn draw_frame(&mut self, frame: &FrameView<'_>) {
        self.clear();
        let ctx = &self.context;

        // Paddle sits on the bottom edge
        ctx.set_fill_style_str(FOREGROUND);
        ctx.fill_rect(
            frame.paddle_x as f64 - self.paddle_width / 2.0,
            self.height - self.paddle_height,
            self.paddle_width,
            self.paddle_height,
        );

        ctx.begin_path();
        if let Err(e) = ctx.arc(
            frame.ball.position.x as f64,
            frame.ball.position.y as f64,
            frame.ball_radius as f64,
            0.0,
            TAU,
        ) {
            log::warn!("Ball draw failed: {:?}", e);
        }
        ctx.fill();
        ctx.close_path();

        ctx.set_fill_style_str(BRICK_COLOR);
        for brick in frame.bricks {
            ctx.fill_rect(
                (brick.x - brick.width / 2.0) as f64,
                (brick.y - brick.height / 2.0) as f64,
                brick.width as f64,
                brick.height as f64,
            );
        }

        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_font(SCORE_FONT);
        ctx.set_text_align("left");
        if let Err(e) = ctx.fill_text(&format!("Score: {}", frame.score), 4.0, 16.0) {
            log::warn!("Score draw failed: {:?}", e);
        }
    }

    fn draw_terminal(&mut self, message: &str) {
        self.clear();
        self.centered_text(message);
    }
}
