//! Paddle position integration
//!
//! Each tick integrates `delta_time * speed * direction` into the paddle
//! centre, clamped so the paddle never leaves the stage.

use crate::config::GameConfig;
use crate::input::Direction;
use crate::sim::Ticker;

/// Clamp a paddle centre to the stage
#[inline]
pub fn clamp_paddle(x: f32, config: &GameConfig) -> f32 {
    let (min, max) = config.paddle_bounds();
    x.clamp(min, max)
}

/// Paddle centre for one session
#[derive(Debug, Clone)]
pub struct PaddleTracker {
    position: f32,
    last_emitted: Option<f32>,
}

impl PaddleTracker {
    /// Paddle starts centred
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: clamp_paddle(config.stage_width / 2.0, config),
            last_emitted: None,
        }
    }

    /// Latest position, whether or not it was emitted
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Integrate one tick; returns the new position only when it changed
    pub fn step(&mut self, ticker: &Ticker, direction: Direction, config: &GameConfig) -> Option<f32> {
        let delta = ticker.delta_secs() * config.paddle_speed * direction.sign();
        self.position = clamp_paddle(self.position + delta, config);

        if self.last_emitted == Some(self.position) {
            return None;
        }
        self.last_emitted = Some(self.position);
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ticker(dt: Option<f32>) -> Ticker {
        Ticker {
            time: 0.0,
            delta_time: dt,
        }
    }

    #[test]
    fn test_starts_centred_and_emits_once() {
        let config = GameConfig::default();
        let mut paddle = PaddleTracker::new(&config);
        assert_eq!(paddle.position(), 240.0);

        assert_eq!(paddle.step(&ticker(None), Direction::Right, &config), Some(240.0));
        // No movement, no emission
        assert_eq!(paddle.step(&ticker(Some(0.1)), Direction::Still, &config), None);
        assert_eq!(paddle.position(), 240.0);
    }

    #[test]
    fn test_moves_by_speed_times_delta() {
        let config = GameConfig::default();
        let mut paddle = PaddleTracker::new(&config);

        // 0.25 s * 240 px/s = 60 px
        assert_eq!(paddle.step(&ticker(Some(0.25)), Direction::Left, &config), Some(180.0));
        assert_eq!(paddle.step(&ticker(Some(0.25)), Direction::Right, &config), Some(240.0));
    }

    #[test]
    fn test_clamps_to_stage() {
        let config = GameConfig::default();
        let mut paddle = PaddleTracker::new(&config);

        for _ in 0..100 {
            paddle.step(&ticker(Some(0.1)), Direction::Left, &config);
        }
        assert_eq!(paddle.position(), 50.0);
        // Pinned against the wall: nothing new to emit
        assert_eq!(paddle.step(&ticker(Some(0.1)), Direction::Left, &config), None);

        for _ in 0..100 {
            paddle.step(&ticker(Some(0.1)), Direction::Right, &config);
        }
        assert_eq!(paddle.position(), 430.0);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Still),
            Just(Direction::Right)
        ]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_stage(
            steps in proptest::collection::vec((arb_direction(), proptest::option::of(0.0f32..5.0)), 0..300),
        ) {
            let config = GameConfig::default();
            let (min, max) = config.paddle_bounds();
            let mut paddle = PaddleTracker::new(&config);

            for (direction, dt) in steps {
                if let Some(x) = paddle.step(&ticker(dt), direction, &config) {
                    prop_assert!(x >= min && x <= max);
                }
                prop_assert!(paddle.position() >= min && paddle.position() <= max);
            }
        }
    }
}
