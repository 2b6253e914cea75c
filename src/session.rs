//! Session lifecycle
//!
//! A [`Session`] is one play-through: its own clock, paddle and state. The
//! [`SessionController`] owns the current session and walks it through
//! `Intro -> Playing -> Terminal`, then replaces it with a fresh one once the
//! restart delay has elapsed. Win and loss are ordinary return values here;
//! only malformed frame timestamps surface as errors.

use crate::autopilot::Autopilot;
use crate::clock::{ClockError, FrameClock};
use crate::config::GameConfig;
use crate::input::{Direction, DirectionSignal, KeyEvent};
use crate::paddle::PaddleTracker;
use crate::render::{FrameView, LOSS_MESSAGE, Renderer, WIN_MESSAGE};
use crate::sim::{Collision, State, Ticker, is_floor_passed, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => WIN_MESSAGE,
            Outcome::Lost => LOSS_MESSAGE,
        }
    }
}

/// Where the controller is in the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Intro screen shown, simulation not yet running
    Intro,
    Playing,
    /// Session over; a new one starts at `restart_at` (ms)
    Terminal { outcome: Outcome, restart_at: f64 },
}

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing to do (tick not due, or waiting to restart)
    Idle,
    /// A tick was simulated and drawn
    Continue,
    Won { score: u64 },
    Lost { score: u64 },
    /// A fresh session replaced the finished one
    Restarted { session: u64 },
}

/// One play-through from a fresh state to a terminal outcome
#[derive(Debug, Clone)]
pub struct Session {
    id: u64,
    clock: FrameClock,
    paddle: PaddleTracker,
    state: State,
}

impl Session {
    pub fn new(id: u64, config: &GameConfig) -> Self {
        Self {
            id,
            clock: FrameClock::new(config),
            paddle: PaddleTracker::new(config),
            state: State::initial(config),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn paddle_x(&self) -> f32 {
        self.paddle.position()
    }

    /// Offer a repaint to the clock; `Some` when a tick is due
    fn poll(&mut self, now: f64) -> Result<Option<Ticker>, ClockError> {
        self.clock.poll(now)
    }

    /// Simulate one due tick with the held direction
    fn advance(&mut self, ticker: &Ticker, direction: Direction, config: &GameConfig) -> Collision {
        self.paddle.step(ticker, direction, config);
        let step = tick(&self.state, ticker, self.paddle.position(), config);
        self.state = step.state;
        step.collision
    }

    /// Terminal check, loss before win
    fn verdict(&self, config: &GameConfig) -> Option<Outcome> {
        if is_floor_passed(&self.state.ball, config) {
            Some(Outcome::Lost)
        } else if self.state.is_cleared() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn view<'a>(&'a self, config: &GameConfig) -> FrameView<'a> {
        FrameView {
            paddle_x: self.paddle.position(),
            ball: &self.state.ball,
            ball_radius: config.ball_radius,
            bricks: &self.state.bricks,
            score: self.state.score,
        }
    }
}

/// Drives sessions back to back
pub struct SessionController {
    config: GameConfig,
    session: Session,
    phase: Phase,
    input: DirectionSignal,
    autopilot: Option<Autopilot>,
    autopilot_seed: u64,
    last_outcome: Option<Outcome>,
}

impl SessionController {
    pub fn new(config: GameConfig) -> Self {
        let session = Session::new(1, &config);
        Self {
            config,
            session,
            phase: Phase::Intro,
            input: DirectionSignal::new(),
            autopilot: None,
            autopilot_seed: 0,
            last_outcome: None,
        }
    }

    /// Seed for the autopilot's aim jitter
    pub fn with_autopilot_seed(mut self, seed: u64) -> Self {
        self.autopilot_seed = seed;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sessions begun so far, including the current one
    pub fn sessions_started(&self) -> u64 {
        self.session.id
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn direction(&self) -> Direction {
        self.input.current()
    }

    /// Draw the intro for the first session
    pub fn start<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        log::info!(
            "Session {} starting with {} bricks",
            self.session.id,
            self.session.state.bricks.len()
        );
        renderer.draw_intro();
    }

    /// Key transitions take effect on the next tick
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.input.apply(event);
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot.is_some()
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if enabled == self.autopilot_enabled() {
            return;
        }
        if enabled {
            self.autopilot = Some(Autopilot::new(self.autopilot_seed));
        } else {
            self.autopilot = None;
            self.input.drive(Direction::Still);
        }
        log::info!("Autopilot: {}", enabled);
    }

    pub fn toggle_autopilot(&mut self) {
        self.set_autopilot(!self.autopilot_enabled());
    }

    /// Handle one repaint at `now` (ms)
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        now: f64,
        renderer: &mut R,
    ) -> Result<SessionEvent, ClockError> {
        match self.phase {
            Phase::Terminal { restart_at, .. } => {
                if now < restart_at {
                    return Ok(SessionEvent::Idle);
                }
                self.restart(renderer);
                return Ok(SessionEvent::Restarted {
                    session: self.session.id,
                });
            }
            Phase::Intro => {
                self.phase = Phase::Playing;
                log::debug!("Session {} playing", self.session.id);
            }
            Phase::Playing => {}
        }

        let Some(ticker) = self.session.poll(now)? else {
            return Ok(SessionEvent::Idle);
        };

        if let Some(autopilot) = self.autopilot.as_mut() {
            let wanted = autopilot.steer(
                &self.session.state.ball,
                self.session.paddle_x(),
                ticker.delta_secs(),
                &self.config,
            );
            for event in self.input.drive(wanted) {
                log::trace!("autopilot {:?}", event);
            }
        }

        let collision = self.session.advance(&ticker, self.input.current(), &self.config);
        log::trace!("tick {:?}", collision);
        renderer.draw_frame(&self.session.view(&self.config));

        let Some(outcome) = self.session.verdict(&self.config) else {
            return Ok(SessionEvent::Continue);
        };

        let score = self.session.state.score;
        log::info!(
            "Session {} {:?} with score {} after {} ticks",
            self.session.id,
            outcome,
            score,
            self.session.clock.ticks()
        );
        renderer.draw_terminal(outcome.message());
        self.last_outcome = Some(outcome);
        self.phase = Phase::Terminal {
            outcome,
            restart_at: now + self.config.restart_delay_ms,
        };

        Ok(match outcome {
            Outcome::Won => SessionEvent::Won { score },
            Outcome::Lost => SessionEvent::Lost { score },
        })
    }

    /// Replace the finished session with a fresh one
    fn restart<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.session = Session::new(self.session.id + 1, &self.config);
        self.phase = Phase::Intro;
        self.start(renderer);
    }
}
