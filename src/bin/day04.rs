use std::fmt::Display;
use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use regex::Regex;

use advent::{run, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref PAIR: Regex = Regex::new(r"(\d+)-(\d+),(\d+)-(\d+)").unwrap();
}

fn contains(outer: &RangeInclusive<u32>, inner: &RangeInclusive<u32>) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &RangeInclusive<u32>, b: &RangeInclusive<u32>) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

fn solve(input: &str) -> impl Display {
    let pairs: Vec<(RangeInclusive<u32>, RangeInclusive<u32>)> = PAIR
        .captures_iter(input)
        .map(|caps| (caps.parse(1)..=caps.parse(2), caps.parse(3)..=caps.parse(4)))
        .collect();

    let nested = pairs
        .iter()
        .filter(|(a, b)| contains(a, b) || contains(b, a))
        .count();

    let overlapping = pairs.iter().filter(|(a, b)| overlaps(a, b)).count();

    Solution::new(nested, overlapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        2-4,6-8
        2-3,4-5
        5-7,7-9
        2-8,3-7
        6-6,4-6
        2-6,4-8
    "};

    #[test]
    fn touching_ranges_overlap() {
        assert!(overlaps(&(5..=7), &(7..=9)));
        assert!(!overlaps(&(2..=3), &(4..=5)));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 2\nPart 2: 4");
    }
}
