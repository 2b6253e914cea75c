//! Per-frame state transition
//!
//! Order within a tick is fixed: motion, bricks, paddle, walls, ceiling, then
//! the vertical bounce. Later tests read the post-motion position.

use super::collision::{is_ceiling_hit, is_collision, is_floor_passed, is_hit, is_wall_hit};
use super::state::{Ball, Collision, State, Ticker};
use crate::config::GameConfig;

/// Result of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: State,
    /// What the ball touched during this transition
    pub collision: Collision,
}

/// Advance the game by one tick
///
/// `prev` is left untouched; the returned snapshot owns its own ball and bricks.
pub fn tick(prev: &State, ticker: &Ticker, paddle_x: f32, config: &GameConfig) -> Step {
    let dt = ticker.delta_secs();
    let mut collision = Collision::default();

    // Euler integration
    let mut ball = Ball {
        position: prev.ball.position + prev.ball.direction * dt * config.ball_speed,
        direction: prev.ball.direction,
    };

    let mut destroyed = 0u64;
    let bricks: Vec<_> = prev
        .bricks
        .iter()
        .filter(|brick| {
            if is_collision(&ball, brick) {
                destroyed += 1;
                false
            } else {
                true
            }
        })
        .copied()
        .collect();
    collision.brick = destroyed > 0;

    // Paddle, wall and ceiling only count while the ball is heading into
    // them, so a ball still inside a band after a long frame is not re-flipped.
    collision.paddle = ball.direction.y > 0.0 && is_hit(&ball, paddle_x, config);

    if is_wall_hit(&ball, config) {
        let away = if ball.position.x < config.ball_radius {
            ball.direction.x.abs()
        } else {
            -ball.direction.x.abs()
        };
        collision.wall = away != ball.direction.x;
        ball.direction.x = away;
    }

    collision.ceiling = ball.direction.y < 0.0 && is_ceiling_hit(&ball, config);
    collision.floor = is_floor_passed(&ball, config);

    if collision.brick || collision.paddle || collision.ceiling {
        ball.direction.y = -ball.direction.y;
    }

    if destroyed > 0 {
        log::trace!("{} brick(s) destroyed, {} left", destroyed, bricks.len());
    }

    Step {
        state: State {
            ball,
            bricks,
            score: prev.score + destroyed * config.brick_score,
        },
        collision,
    }
}
