use std::collections::HashSet;
use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use advent::twod::Pos;
use advent::{run, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref POINT: Regex = Regex::new(r"(\d+),(\d+)").unwrap();
}

const SOURCE: Pos = Pos::new(0, 500);

/// Down, then down-left, then down-right.
const FALLS: [Pos; 3] = [Pos::new(1, 0), Pos::new(1, -1), Pos::new(1, 1)];

fn parse(input: &str) -> HashSet<Pos> {
    let mut rock = HashSet::new();

    for line in input.lines() {
        let corners: Vec<Pos> = POINT
            .captures_iter(line)
            .map(|caps| Pos::new(caps.parse(2), caps.parse(1)))
            .collect();

        if let [only] = corners.as_slice() {
            rock.insert(*only);
        }

        for segment in corners.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            let step = (to - from).signum();
            let mut point = from;
            rock.insert(point);
            while point != to {
                point += step;
                rock.insert(point);
            }
        }
    }

    rock
}

/// How many grains come to rest. Without a floor the count stops at the first
/// grain to fall past the lowest rock; with one (two below the lowest rock) it
/// stops once the source itself is buried.
fn pour(rock: &HashSet<Pos>, floor: bool) -> usize {
    let lowest = rock.iter().map(|p| p.row).max().unwrap_or(0);
    let floor_row = lowest + 2;

    let mut blocked = rock.clone();
    let mut resting = 0;

    while !blocked.contains(&SOURCE) {
        let mut grain = SOURCE;

        loop {
            if !floor && grain.row > lowest {
                return resting;
            }
            if floor && grain.row + 1 == floor_row {
                break;
            }

            match FALLS
                .iter()
                .map(|&fall| grain + fall)
                .find(|next| !blocked.contains(next))
            {
                Some(next) => grain = next,
                None => break,
            }
        }

        blocked.insert(grain);
        resting += 1;
    }

    resting
}

fn solve(input: &str) -> impl Display {
    let rock = parse(input);
    Solution::new(pour(&rock, false), pour(&rock, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        498,4 -> 498,6 -> 496,6
        503,4 -> 502,4 -> 502,9 -> 494,9
    "};

    #[test]
    fn rock_paths() {
        let rock = parse(EXAMPLE);
        assert_eq!(rock.len(), 20);
        assert!(rock.contains(&Pos::new(6, 497)));
        assert!(rock.contains(&Pos::new(9, 494)));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 24\nPart 2: 93");
    }
}
