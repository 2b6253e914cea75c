//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Snapshots in, snapshots out
//! - Stable iteration order (brick layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{is_ceiling_hit, is_collision, is_floor_passed, is_hit, is_wall_hit};
pub use state::{Ball, Brick, Collision, State, Ticker, generate_bricks};
pub use tick::{Step, tick};
