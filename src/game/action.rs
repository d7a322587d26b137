use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Keys held during one tick.
///
/// The engine never polls hardware; the host fills one of these per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub restart: bool,
}

impl KeySnapshot {
    /// Snapshot with only the given direction held
    pub fn steering(direction: Direction) -> Self {
        let mut snapshot = Self::default();
        snapshot.hold(direction);
        snapshot
    }

    /// Snapshot with only the start key held
    pub fn start() -> Self {
        Self {
            start: true,
            ..Default::default()
        }
    }

    /// Snapshot with only the restart key held
    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }

    pub fn hold(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// The held direction, checked in Up, Down, Left, Right order.
    pub fn direction(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_snapshot_direction_priority() {
        let mut snapshot = KeySnapshot::default();
        assert_eq!(snapshot.direction(), None);

        snapshot.hold(Direction::Right);
        assert_eq!(snapshot.direction(), Some(Direction::Right));

        snapshot.hold(Direction::Left);
        assert_eq!(snapshot.direction(), Some(Direction::Left));

        snapshot.hold(Direction::Up);
        snapshot.hold(Direction::Down);
        assert_eq!(snapshot.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_snapshot_clear() {
        let mut snapshot = KeySnapshot::steering(Direction::Down);
        snapshot.restart = true;
        assert!(!snapshot.is_empty());

        snapshot.clear();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, KeySnapshot::default());
    }
}
