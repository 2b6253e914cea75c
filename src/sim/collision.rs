//! Collision predicates for the ball against the paddle and bricks
//!
//! Both tests are axis-aligned and side-effect free. The brick test looks one
//! unscaled direction step ahead of the ball, not a time-scaled displacement,
//! so a fast ball or a long frame can tunnel through a thin brick.

use super::state::{Ball, Brick};
use crate::config::GameConfig;

/// Ball is over the paddle span and has reached the paddle band
pub fn is_hit(ball: &Ball, paddle_x: f32, config: &GameConfig) -> bool {
    let half = config.paddle_width / 2.0;
    let band_top = config.stage_height - config.paddle_height - config.ball_radius / 2.0;

    ball.position.x > paddle_x - half
        && ball.position.x < paddle_x + half
        && ball.position.y > band_top
}

/// Ball's next step lands inside the brick
pub fn is_collision(ball: &Ball, brick: &Brick) -> bool {
    brick.contains(ball.next_position())
}

/// Ball is within one radius of the left or right boundary
pub fn is_wall_hit(ball: &Ball, config: &GameConfig) -> bool {
    ball.position.x < config.ball_radius
        || ball.position.x > config.stage_width - config.ball_radius
}

/// Ball is within one radius of the top boundary
pub fn is_ceiling_hit(ball: &Ball, config: &GameConfig) -> bool {
    ball.position.y < config.ball_radius
}

/// Ball has dropped past the floor band
pub fn is_floor_passed(ball: &Ball, config: &GameConfig) -> bool {
    ball.position.y > config.stage_height - config.ball_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            position: Vec2::new(x, y),
            direction: Vec2::new(dx, dy),
        }
    }

    #[test]
    fn test_paddle_hit() {
        let config = GameConfig::default();
        // Band starts at 320 - 20 - 5 = 295
        assert!(is_hit(&ball_at(240.0, 296.0, 0.0, 2.0), 240.0, &config));
        assert!(!is_hit(&ball_at(240.0, 294.0, 0.0, 2.0), 240.0, &config));
        // Outside the half-width span
        assert!(!is_hit(&ball_at(291.0, 300.0, 0.0, 2.0), 240.0, &config));
        assert!(!is_hit(&ball_at(190.0, 300.0, 0.0, 2.0), 240.0, &config));
        assert!(is_hit(&ball_at(289.0, 300.0, 0.0, 2.0), 240.0, &config));
    }

    #[test]
    fn test_brick_collision_looks_one_step_ahead() {
        let brick = Brick::new(100.0, 50.0, 40.0, 20.0);

        // Currently below the brick, next step enters it
        let ball = ball_at(100.0, 61.0, 0.0, -2.0);
        assert!(!brick.contains(ball.position));
        assert!(is_collision(&ball, &brick));

        // Moving away: next step leaves
        let ball = ball_at(100.0, 61.0, 0.0, 2.0);
        assert!(!is_collision(&ball, &brick));
    }

    #[test]
    fn test_walls_and_ceiling() {
        let config = GameConfig::default();
        assert!(is_wall_hit(&ball_at(9.0, 100.0, -2.0, 0.0), &config));
        assert!(is_wall_hit(&ball_at(471.0, 100.0, 2.0, 0.0), &config));
        assert!(!is_wall_hit(&ball_at(240.0, 100.0, 2.0, 0.0), &config));

        assert!(is_ceiling_hit(&ball_at(240.0, 9.0, 0.0, -2.0), &config));
        assert!(!is_ceiling_hit(&ball_at(240.0, 11.0, 0.0, -2.0), &config));
    }

    #[test]
    fn test_floor() {
        let config = GameConfig::default();
        assert!(is_floor_passed(&ball_at(240.0, 311.0, 0.0, 2.0), &config));
        assert!(!is_floor_passed(&ball_at(240.0, 309.0, 0.0, 2.0), &config));
    }
}
