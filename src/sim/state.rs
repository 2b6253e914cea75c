//! Game state and core simulation types
//!
//! Snapshots are plain values: the reducer reads one and builds the next.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Velocity direction (not normalized, scaled by ball speed each tick)
    pub direction: Vec2,
}

impl Ball {
    /// Where the ball would be after one unscaled direction step
    #[inline]
    pub fn next_position(&self) -> Vec2 {
        self.position + self.direction
    }
}

/// A brick (center-anchored axis-aligned rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict containment test (edges excluded)
    pub fn contains(&self, point: Vec2) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        point.x > self.x - half_w
            && point.x < self.x + half_w
            && point.y > self.y - half_h
            && point.y < self.y + half_h
    }
}

/// One frame of the clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticker {
    /// Absolute timestamp (ms)
    pub time: f64,
    /// Seconds since the previous tick; `None` on the first tick of a clock
    pub delta_time: Option<f32>,
}

impl Ticker {
    /// Delta to integrate with. The first tick contributes no motion.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta_time.unwrap_or(0.0)
    }
}

/// Collisions detected during a single transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collision {
    pub paddle: bool,
    pub floor: bool,
    pub wall: bool,
    pub ceiling: bool,
    pub brick: bool,
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub ball: Ball,
    /// Remaining bricks, in layout order
    pub bricks: Vec<Brick>,
    pub score: u64,
}

impl State {
    /// Fresh state: ball at stage centre, full brick grid, zero score
    pub fn initial(config: &GameConfig) -> Self {
        let (dx, dy) = config.ball_direction;
        Self {
            ball: Ball {
                position: Vec2::new(config.stage_width / 2.0, config.stage_height / 2.0),
                direction: Vec2::new(dx, dy),
            },
            bricks: generate_bricks(config),
            score: 0,
        }
    }

    /// No bricks left
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }
}

/// Lay out the brick grid row by row, left to right
pub fn generate_bricks(config: &GameConfig) -> Vec<Brick> {
    let width = config.brick_width();
    let height = config.brick_height;
    let gap = config.brick_gap;

    let count = (config.brick_rows as usize)
        .checked_mul(config.brick_columns as usize)
        .unwrap_or(0);
    let mut bricks = Vec::with_capacity(count);
    for row in 0..config.brick_rows {
        for column in 0..config.brick_columns {
            let x = column as f32 * (width + gap) + width / 2.0 + gap;
            let y = row as f32 * (height + gap) + height / 2.0 + gap + config.brick_top_offset;
            bricks.push(Brick::new(x, y, width, height));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let config = GameConfig::default();
        let state = State::initial(&config);

        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 35);
        assert_eq!(state.ball.position, Vec2::new(240.0, 160.0));
        assert_eq!(state.ball.direction, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_brick_layout_fits_stage() {
        let config = GameConfig::default();
        let bricks = generate_bricks(&config);

        let first = bricks[0];
        assert!((first.x - first.width / 2.0 - config.brick_gap).abs() < 1e-3);
        assert!((first.y - (config.brick_height / 2.0 + config.brick_gap + 20.0)).abs() < 1e-3);

        for brick in &bricks {
            assert!(brick.x - brick.width / 2.0 >= 0.0);
            assert!(brick.x + brick.width / 2.0 <= config.stage_width + 1e-3);
        }

        // Row-major order: the eighth brick starts the second row
        assert!((bricks[7].y - bricks[0].y - (config.brick_height + config.brick_gap)).abs() < 1e-3);
        assert!((bricks[7].x - bricks[0].x).abs() < 1e-3);
    }

    #[test]
    fn test_layout_is_reproducible() {
        let config = GameConfig::default();
        assert_eq!(generate_bricks(&config), generate_bricks(&config));
    }

    #[test]
    fn test_brick_contains_excludes_edges() {
        let brick = Brick::new(50.0, 50.0, 20.0, 10.0);
        assert!(brick.contains(Vec2::new(50.0, 50.0)));
        assert!(brick.contains(Vec2::new(59.9, 54.9)));
        assert!(!brick.contains(Vec2::new(60.0, 50.0)));
        assert!(!brick.contains(Vec2::new(50.0, 45.0)));
    }

    #[test]
    fn test_first_tick_has_no_delta() {
        let ticker = Ticker {
            time: 1234.0,
            delta_time: None,
        };
        assert_eq!(ticker.delta_secs(), 0.0);
    }
}
