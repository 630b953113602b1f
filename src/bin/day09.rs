use std::collections::HashSet;
use std::fmt::Display;

use advent::twod::{Dir, Pos};
use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

fn parse(input: &str) -> Vec<(Dir, usize)> {
    input
        .lines()
        .map(|line| {
            let (dir, steps) = line
                .trim()
                .split_once(' ')
                .unwrap_or_else(|| panic!("Malformed motion: {:?}", line));

            let dir: Dir = dir.parse().unwrap_or_else(|err| panic!("{}", err));
            let steps = steps
                .parse()
                .unwrap_or_else(|err| panic!("Bad step count in {:?}: {}", line, err));

            (dir, steps)
        })
        .collect()
}

/// Move `knot` towards `leader` if they no longer touch, one step along each
/// axis at most.
fn follow(knot: Pos, leader: Pos) -> Pos {
    if knot.chebyshev(leader) > 1 {
        knot + (leader - knot).signum()
    } else {
        knot
    }
}

/// Number of distinct positions the last knot of a `length`-knot rope visits.
fn tail_visits(motions: &[(Dir, usize)], length: usize) -> usize {
    let mut rope = vec![Pos::ORIGIN; length];
    let mut visited: HashSet<Pos> = HashSet::new();
    visited.insert(Pos::ORIGIN);

    for &(dir, steps) in motions {
        for _ in 0..steps {
            rope[0] += dir;
            for i in 1..rope.len() {
                rope[i] = follow(rope[i], rope[i - 1]);
            }
            visited.extend(rope.last().copied());
        }
    }

    visited.len()
}

fn solve(input: &str) -> impl Display {
    let motions = parse(input);
    Solution::new(tail_visits(&motions, 2), tail_visits(&motions, 10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        R 4
        U 4
        L 3
        D 1
        R 4
        D 1
        L 5
        R 2
    "};

    const LARGER_EXAMPLE: &str = indoc! {"
        R 5
        U 8
        L 8
        D 3
        R 17
        D 10
        L 25
        U 20
    "};

    #[test]
    fn diagonal_follow() {
        assert_eq!(follow(Pos::new(0, 0), Pos::new(-2, 1)), Pos::new(-1, 1));
        assert_eq!(follow(Pos::new(0, 0), Pos::new(1, 1)), Pos::new(0, 0));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 13\nPart 2: 1");
    }

    #[test]
    fn longer_rope() {
        assert_eq!(tail_visits(&parse(LARGER_EXAMPLE), 10), 36);
    }
}
