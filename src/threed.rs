//! Integer points and vectors in 3D space.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

pub const UNIT_X: Pos3 = Pos3::new(1, 0, 0);
pub const UNIT_Y: Pos3 = Pos3::new(0, 1, 0);
pub const UNIT_Z: Pos3 = Pos3::new(0, 0, 1);

/// Offsets to the six face-sharing neighbors.
pub const FACES: [Pos3; 6] = [
    Pos3::new(-1, 0, 0),
    Pos3::new(1, 0, 0),
    Pos3::new(0, -1, 0),
    Pos3::new(0, 1, 0),
    Pos3::new(0, 0, -1),
    Pos3::new(0, 0, 1),
];

impl Pos3 {
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Pos3 { x, y, z }
    }

    pub fn neighbors(self) -> impl Iterator<Item = Pos3> + Clone {
        FACES.iter().map(move |&offset| self + offset)
    }

    #[inline]
    pub fn dot(self, other: Pos3) -> i64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Pos3) -> Pos3 {
        Pos3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Componentwise minimum.
    pub fn min(self, other: Pos3) -> Pos3 {
        Pos3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Pos3) -> Pos3 {
        Pos3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// True if every component lies within the inclusive box `low..=high`.
    pub fn within(self, low: Pos3, high: Pos3) -> bool {
        (low.x..=high.x).contains(&self.x)
            && (low.y..=high.y).contains(&self.y)
            && (low.z..=high.z).contains(&self.z)
    }
}

impl Display for Pos3 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for Pos3 {
    type Err = ParseError;

    /// `x,y,z`
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut parts = s.trim().split(',');
        let mut next = || -> Result<i64, ParseError> {
            let part = parts
                .next()
                .ok_or_else(|| ParseError::malformed("3D point", s))?;
            Ok(part.trim().parse()?)
        };

        let point = Pos3::new(next()?, next()?, next()?);

        match parts.next() {
            None => Ok(point),
            Some(_) => Err(ParseError::malformed("3D point", s)),
        }
    }
}

impl Add for Pos3 {
    type Output = Pos3;

    #[inline]
    fn add(self, rhs: Pos3) -> Pos3 {
        Pos3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Pos3 {
    type Output = Pos3;

    #[inline]
    fn sub(self, rhs: Pos3) -> Pos3 {
        Pos3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Pos3 {
    type Output = Pos3;

    #[inline]
    fn neg(self) -> Pos3 {
        Pos3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i64> for Pos3 {
    type Output = Pos3;

    #[inline]
    fn mul(self, rhs: i64) -> Pos3 {
        Pos3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point() {
        assert_eq!("2,2,2".parse(), Ok(Pos3::new(2, 2, 2)));
        assert_eq!("1,-2,30".parse(), Ok(Pos3::new(1, -2, 30)));
        assert!("1,2".parse::<Pos3>().is_err());
        assert!("1,2,3,4".parse::<Pos3>().is_err());
    }

    #[test]
    fn neighbors_share_a_face() {
        let center = Pos3::new(1, 1, 1);
        for neighbor in center.neighbors() {
            let d = neighbor - center;
            assert_eq!(d.x.abs() + d.y.abs() + d.z.abs(), 1);
        }
    }

    #[test]
    fn right_handed_axes() {
        assert_eq!(UNIT_X.cross(UNIT_Y), UNIT_Z);
        assert_eq!(UNIT_Y.cross(UNIT_Z), UNIT_X);
        assert_eq!(UNIT_Z.cross(UNIT_X), UNIT_Y);
        assert_eq!((-UNIT_Z).cross(UNIT_Y), UNIT_X);
    }
}
