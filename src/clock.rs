//! Frame clock
//!
//! Turns repaint timestamps into ticks paced to the configured rate. The
//! caller owns the repaint source (`requestAnimationFrame` in the browser,
//! a synthetic timer natively) and feeds every timestamp in; frames that
//! arrive before the next tick is due are skipped.

use thiserror::Error;

use crate::config::GameConfig;
use crate::sim::Ticker;

/// Tolerance for repaint jitter when deciding whether a tick is due (ms)
const PACING_SLACK_MS: f64 = 1.0;

/// Malformed frame timestamps
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
    #[error("frame timestamp is not finite: {0}")]
    NonFinite(f64),
    #[error("frame timestamp went backwards: {now} < {previous}")]
    Backwards { previous: f64, now: f64 },
}

/// Tick source for a single session
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    max_delta_secs: f32,
    last_tick: Option<f64>,
    last_frame: Option<f64>,
    ticks: u64,
}

impl FrameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            interval_ms: config.tick_interval_ms(),
            max_delta_secs: config.max_delta_secs,
            last_tick: None,
            last_frame: None,
            ticks: 0,
        }
    }

    /// Number of ticks emitted so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Offer a repaint timestamp (ms); returns a tick if one is due
    ///
    /// The first tick carries no delta. Deltas are capped so a stall (hidden
    /// tab, debugger) does not teleport the ball.
    pub fn poll(&mut self, now: f64) -> Result<Option<Ticker>, ClockError> {
        if !now.is_finite() {
            return Err(ClockError::NonFinite(now));
        }
        if let Some(previous) = self.last_frame {
            if now < previous {
                return Err(ClockError::Backwards { previous, now });
            }
        }
        self.last_frame = Some(now);

        let delta_time = match self.last_tick {
            None => None,
            Some(last) => {
                let elapsed = now - last;
                if elapsed + PACING_SLACK_MS < self.interval_ms {
                    return Ok(None);
                }
                Some(((elapsed / 1000.0) as f32).min(self.max_delta_secs))
            }
        };

        self.last_tick = Some(now);
        self.ticks += 1;
        Ok(Some(Ticker {
            time: now,
            delta_time,
        }))
    }
}
