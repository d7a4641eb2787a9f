use std::fmt;

/// One of the four grid-adjacent neighbors of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards row + 1
    Down,
    /// Towards col - 1
    Left,
    /// Towards col + 1
    Right,
}

impl Direction {
    /// All directions in solver enumeration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing back at the origin cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column deltas for a single step
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }

    /// Direction of a single step from `from` to `to`, if they are adjacent
    pub const fn between(from: [usize; 2], to: [usize; 2]) -> Option<Self> {
        if from[1] == to[1] {
            if to[0] + 1 == from[0] {
                return Some(Self::Up);
            }
            if from[0] + 1 == to[0] {
                return Some(Self::Down);
            }
        }
        if from[0] == to[0] {
            if to[1] + 1 == from[1] {
                return Some(Self::Left);
            }
            if from[1] + 1 == to[1] {
                return Some(Self::Right);
            }
        }
        None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
