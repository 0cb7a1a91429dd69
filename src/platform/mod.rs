//! Platform abstraction layer
//!
//! Translates host input into the two game commands and holds them until the
//! next tick boundary so a tick never sees a half-applied input.

use crate::sim::Command;

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the game
    Command(Command),
    /// Toggle the idle/demo autopilot
    ToggleIdle,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn map_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "ArrowUp" | "w" | "W" => Some(KeyAction::Command(Command::Jump)),
        "x" | "X" | "f" | "F" | "Enter" => Some(KeyAction::Command(Command::Shoot)),
        "i" | "I" => Some(KeyAction::ToggleIdle),
        _ => None,
    }
}

/// Left half of the surface jumps, right half shoots
pub fn map_pointer(x: f32, surface_width: f32) -> Command {
    if x < surface_width / 2.0 {
        Command::Jump
    } else {
        Command::Shoot
    }
}

/// Commands received between ticks, in arrival order
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Take everything queued so far, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(" "), Some(KeyAction::Command(Command::Jump)));
        assert_eq!(map_key("ArrowUp"), Some(KeyAction::Command(Command::Jump)));
        assert_eq!(map_key("x"), Some(KeyAction::Command(Command::Shoot)));
        assert_eq!(map_key("Enter"), Some(KeyAction::Command(Command::Shoot)));
        assert_eq!(map_key("I"), Some(KeyAction::ToggleIdle));
        assert_eq!(map_key("q"), None);
    }

    #[test]
    fn test_pointer_halves() {
        assert_eq!(map_pointer(10.0, 400.0), Command::Jump);
        assert_eq!(map_pointer(199.9, 400.0), Command::Jump);
        assert_eq!(map_pointer(200.0, 400.0), Command::Shoot);
        assert_eq!(map_pointer(390.0, 400.0), Command::Shoot);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Jump);
        queue.push(Command::Shoot);
        queue.push(Command::Shoot);
        assert_eq!(queue.len(), 3);

        assert_eq!(
            queue.drain(),
            vec![Command::Jump, Command::Shoot, Command::Shoot]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
