use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;

use advent::{run, ParseError};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// A number written in balanced base 5, with digits `=` (-2), `-` (-1), `0`,
/// `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
struct Snafu(i64);

fn digit_value(c: char) -> Result<i64, ParseError> {
    match c {
        '=' => Ok(-2),
        '-' => Ok(-1),
        '0' => Ok(0),
        '1' => Ok(1),
        '2' => Ok(2),
        _ => Err(ParseError::SnafuDigit(c)),
    }
}

impl FromStr for Snafu {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::UnexpectedEnd("SNAFU number"));
        }

        s.chars()
            .try_fold(0, |total, c| Ok::<_, ParseError>(total * 5 + digit_value(c)?))
            .map(Snafu)
    }
}

impl Display for Snafu {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0");
        }

        let mut digits = Vec::new();
        let mut value = self.0;

        while value != 0 {
            // Shift by 2 so the remainder lands on a digit in -2..=2.
            let digit = (value + 2).rem_euclid(5) - 2;
            digits.push(match digit {
                -2 => '=',
                -1 => '-',
                0 => '0',
                1 => '1',
                _ => '2',
            });
            value = (value - digit) / 5;
        }

        digits.iter().rev().try_for_each(|&c| write!(f, "{}", c))
    }
}

impl Sum for Snafu {
    fn sum<I: Iterator<Item = Snafu>>(iter: I) -> Snafu {
        Snafu(iter.map(|Snafu(value)| value).sum())
    }
}

fn solve(input: &str) -> impl Display {
    let total: Snafu = input
        .lines()
        .map(|line| {
            line.parse()
                .unwrap_or_else(|err| panic!("Bad fuel requirement {:?}: {}", line, err))
        })
        .sum();

    tracing::debug!(decimal = total.0, "fuel total");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1=-0-2
        12111
        2=0=
        21
        2=01
        111
        20012
        112
        1=-1=
        1-12
        12
        1=
        122
    "};

    #[test]
    fn decode() {
        assert_eq!("1=-0-2".parse(), Ok(Snafu(1747)));
        assert_eq!("2=".parse(), Ok(Snafu(8)));
        assert_eq!("1-0---0".parse(), Ok(Snafu(12345)));
        assert_eq!("1?".parse::<Snafu>(), Err(ParseError::SnafuDigit('?')));
        assert_eq!("".parse::<Snafu>(), Err(ParseError::UnexpectedEnd("SNAFU number")));
    }

    #[test]
    fn encode() {
        assert_eq!(Snafu(0).to_string(), "0");
        assert_eq!(Snafu(3).to_string(), "1=");
        assert_eq!(Snafu(2022).to_string(), "1=11-2");
        assert_eq!(Snafu(314159265).to_string(), "1121-1110-1=0");
    }

    #[test]
    fn round_trip() {
        for value in (-500..500).chain([4890, 1_000_000_007]) {
            let text = Snafu(value).to_string();
            assert_eq!(text.parse(), Ok(Snafu(value)), "{}", text);
        }
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "2=-1=0");
    }
}
