//! Keyboard input folded into a single direction signal
//!
//! The signal always has a current value. The last key transition wins.

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// A raw key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Held horizontal movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Still,
    Right,
}

impl Direction {
    /// -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Current direction, updated on key transitions
#[derive(Debug, Clone, Default)]
pub struct DirectionSignal {
    current: Direction,
}

impl DirectionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    /// Fold one key transition into the signal
    ///
    /// Releasing either key stops the paddle, even if the other is still held.
    pub fn apply(&mut self, event: KeyEvent) {
        self.current = match event {
            KeyEvent::Pressed(Key::Left) => Direction::Left,
            KeyEvent::Pressed(Key::Right) => Direction::Right,
            KeyEvent::Released(_) => Direction::Still,
        };
    }

    /// Emit the key transitions that move the signal to `wanted`
    pub fn drive(&mut self, wanted: Direction) -> Vec<KeyEvent> {
        if wanted == self.current {
            return Vec::new();
        }

        let events = match (self.current, wanted) {
            (_, Direction::Left) => vec![KeyEvent::Pressed(Key::Left)],
            (_, Direction::Right) => vec![KeyEvent::Pressed(Key::Right)],
            (Direction::Left, Direction::Still) => vec![KeyEvent::Released(Key::Left)],
            (_, Direction::Still) => vec![KeyEvent::Released(Key::Right)],
        };
        for event in &events {
            self.apply(*event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut signal = DirectionSignal::new();
        assert_eq!(signal.current(), Direction::Still);

        signal.apply(KeyEvent::Pressed(Key::Left));
        assert_eq!(signal.current().sign(), -1.0);

        signal.apply(KeyEvent::Released(Key::Left));
        assert_eq!(signal.current().sign(), 0.0);

        signal.apply(KeyEvent::Pressed(Key::Right));
        assert_eq!(signal.current().sign(), 1.0);
    }

    #[test]
    fn test_most_recent_event_wins() {
        let mut signal = DirectionSignal::new();
        signal.apply(KeyEvent::Pressed(Key::Left));
        signal.apply(KeyEvent::Pressed(Key::Right));
        assert_eq!(signal.current(), Direction::Right);

        // Releasing the older key still stops the paddle
        signal.apply(KeyEvent::Released(Key::Left));
        assert_eq!(signal.current(), Direction::Still);
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("Left"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key("ArrowUp"), None);
        assert_eq!(Key::from_dom_key("a"), None);
    }

    #[test]
    fn test_drive_emits_minimal_transitions() {
        let mut signal = DirectionSignal::new();
        assert!(signal.drive(Direction::Still).is_empty());

        assert_eq!(signal.drive(Direction::Left), vec![KeyEvent::Pressed(Key::Left)]);
        assert_eq!(signal.drive(Direction::Right), vec![KeyEvent::Pressed(Key::Right)]);
        assert_eq!(signal.drive(Direction::Still), vec![KeyEvent::Released(Key::Right)]);
        assert_eq!(signal.current(), Direction::Still);
    }
}
