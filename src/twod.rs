//! Row/column coordinates on an unbounded 2D plane. Rows grow downwards.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: i64,
    pub col: i64,
}

impl Pos {
    pub const ORIGIN: Pos = Pos::new(0, 0);

    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Pos { row, col }
    }

    #[inline]
    pub fn manhattan(self, other: Pos) -> i64 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Distance where diagonal steps count as one.
    #[inline]
    pub fn chebyshev(self, other: Pos) -> i64 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Each component clamped to -1, 0, or 1.
    #[inline]
    pub fn signum(self) -> Pos {
        Pos::new(self.row.signum(), self.col.signum())
    }

    /// The four orthogonal neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> + Clone {
        Dir::ALL.iter().map(move |&dir| self + dir)
    }

    /// All eight surrounding positions, orthogonal and diagonal.
    pub fn adjacent(self) -> impl Iterator<Item = Pos> + Clone {
        ADJACENT.iter().map(move |&offset| self + offset)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Pos;

    #[inline]
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Pos {
    #[inline]
    fn add_assign(&mut self, rhs: Pos) {
        *self = *self + rhs;
    }
}

impl Sub for Pos {
    type Output = Pos;

    #[inline]
    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i64> for Pos {
    type Output = Pos;

    #[inline]
    fn mul(self, rhs: i64) -> Pos {
        Pos::new(self.row * rhs, self.col * rhs)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    #[inline]
    fn add(self, rhs: Dir) -> Pos {
        self + rhs.offset()
    }
}

impl AddAssign<Dir> for Pos {
    #[inline]
    fn add_assign(&mut self, rhs: Dir) {
        *self = *self + rhs;
    }
}

/// N, NE, E, SE, S, SW, W, NW
pub const ADJACENT: [Pos; 8] = [
    Pos::new(-1, 0),
    Pos::new(-1, 1),
    Pos::new(0, 1),
    Pos::new(1, 1),
    Pos::new(1, 0),
    Pos::new(1, -1),
    Pos::new(0, -1),
    Pos::new(-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Right, Dir::Up, Dir::Left, Dir::Down];

    #[inline]
    pub fn offset(self) -> Pos {
        match self {
            Dir::Up => Pos::new(-1, 0),
            Dir::Down => Pos::new(1, 0),
            Dir::Left => Pos::new(0, -1),
            Dir::Right => Pos::new(0, 1),
        }
    }

    pub fn turn_left(self) -> Dir {
        match self {
            Dir::Up => Dir::Left,
            Dir::Left => Dir::Down,
            Dir::Down => Dir::Right,
            Dir::Right => Dir::Up,
        }
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Dir::Up => Dir::Right,
            Dir::Right => Dir::Down,
            Dir::Down => Dir::Left,
            Dir::Left => Dir::Up,
        }
    }

    pub fn reverse(self) -> Dir {
        self.turn_left().turn_left()
    }
}

impl FromStr for Dir {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "U" | "^" => Ok(Dir::Up),
            "D" | "v" => Ok(Dir::Down),
            "L" | "<" => Ok(Dir::Left),
            "R" | ">" => Ok(Dir::Right),
            _ => Err(ParseError::Direction(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Pos::new(18, 2).manhattan(Pos::new(15, -2)), 7);
    }

    #[test]
    fn neighbors_are_orthogonal() {
        let mut found: Vec<Pos> = Pos::new(5, 5).neighbors().collect();
        found.sort();
        assert_eq!(
            found,
            [Pos::new(4, 5), Pos::new(5, 4), Pos::new(5, 6), Pos::new(6, 5)]
        );
    }

    #[test]
    fn adjacent_are_all_one_step_away() {
        let origin = Pos::new(3, -7);
        assert!(origin.adjacent().all(|p| origin.chebyshev(p) == 1));
        assert_eq!(origin.adjacent().count(), 8);
    }

    #[test]
    fn turning() {
        assert_eq!(Dir::Right.turn_right(), Dir::Down);
        assert_eq!(Dir::Right.turn_left(), Dir::Up);
        assert_eq!(Dir::Up.reverse(), Dir::Down);
    }

    #[test]
    fn parse_dir() {
        assert_eq!("R".parse(), Ok(Dir::Right));
        assert_eq!("v".parse(), Ok(Dir::Down));
        assert_eq!("X".parse::<Dir>(), Err(ParseError::Direction("X".to_owned())));
    }
}
