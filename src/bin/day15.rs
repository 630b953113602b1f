use std::fmt::Display;

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

use advent::twod::Pos;
use advent::{run, BetterIterator, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// The row checked in part 1.
const TARGET_ROW: i64 = 2_000_000;

/// The distress beacon lies in `0..=SEARCH_BOUND` on both axes.
const SEARCH_BOUND: i64 = 4_000_000;

lazy_static! {
    static ref REPORT: Regex = Regex::new(
        r"Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy)]
struct Sensor {
    pos: Pos,
    beacon: Pos,
    radius: i64,
}

impl Sensor {
    /// Columns this sensor rules out on `row`, as an inclusive range.
    fn covers(&self, row: i64) -> Option<(i64, i64)> {
        let spare = self.radius - (self.pos.row - row).abs();
        if spare < 0 {
            None
        } else {
            Some((self.pos.col - spare, self.pos.col + spare))
        }
    }
}

fn parse(input: &str) -> Vec<Sensor> {
    REPORT
        .captures_iter(input)
        .map(|caps| {
            let pos = Pos::new(caps.parse(2), caps.parse(1));
            let beacon = Pos::new(caps.parse(4), caps.parse(3));
            Sensor {
                pos,
                beacon,
                radius: pos.manhattan(beacon),
            }
        })
        .collect()
}

/// Covered columns on `row`, sorted, with touching ranges merged.
fn coverage(sensors: &[Sensor], row: i64) -> Vec<(i64, i64)> {
    let mut ranges: Vec<(i64, i64)> = sensors.iter().filter_map(|s| s.covers(row)).collect();
    ranges.sort_unstable();

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if low <= last.1 + 1 => last.1 = last.1.max(high),
            _ => merged.push((low, high)),
        }
    }

    merged
}

fn excluded_on_row(sensors: &[Sensor], row: i64) -> i64 {
    let covered: i64 = coverage(sensors, row)
        .iter()
        .map(|(low, high)| high - low + 1)
        .sum();

    let mut beacons: Vec<i64> = sensors
        .iter()
        .filter(|s| s.beacon.row == row)
        .map(|s| s.beacon.col)
        .collect();
    beacons.sort_unstable();

    covered - beacons.into_iter().unique().count() as i64
}

/// The first column in `0..=bound` on `row` that no sensor covers.
fn gap_in_row(sensors: &[Sensor], row: i64, bound: i64) -> Option<i64> {
    let mut col = 0;
    for (low, high) in coverage(sensors, row) {
        if low > col {
            break;
        }
        col = col.max(high + 1);
    }

    if col <= bound {
        Some(col)
    } else {
        None
    }
}

fn distress_beacon(sensors: &[Sensor], bound: i64) -> Option<Pos> {
    (0..=bound)
        .into_par_iter()
        .find_map_any(|row| gap_in_row(sensors, row, bound).map(|col| Pos::new(row, col)))
}

fn solve_with(input: &str, row: i64, bound: i64) -> Solution<i64, i64> {
    let sensors = parse(input);
    tracing::debug!(count = sensors.len(), "sensors");

    let beacon = distress_beacon(&sensors, bound).expect("Every position is covered");
    tracing::debug!(%beacon, "distress beacon");

    Solution::new(
        excluded_on_row(&sensors, row),
        beacon.col * 4_000_000 + beacon.row,
    )
}

fn solve(input: &str) -> impl Display {
    solve_with(input, TARGET_ROW, SEARCH_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Sensor at x=2, y=18: closest beacon is at x=-2, y=15
        Sensor at x=9, y=16: closest beacon is at x=10, y=16
        Sensor at x=13, y=2: closest beacon is at x=15, y=3
        Sensor at x=12, y=14: closest beacon is at x=10, y=16
        Sensor at x=10, y=20: closest beacon is at x=10, y=16
        Sensor at x=14, y=17: closest beacon is at x=10, y=16
        Sensor at x=8, y=7: closest beacon is at x=2, y=10
        Sensor at x=2, y=0: closest beacon is at x=2, y=10
        Sensor at x=0, y=11: closest beacon is at x=2, y=10
        Sensor at x=20, y=14: closest beacon is at x=25, y=17
        Sensor at x=17, y=20: closest beacon is at x=21, y=22
        Sensor at x=16, y=7: closest beacon is at x=15, y=3
        Sensor at x=14, y=3: closest beacon is at x=15, y=3
        Sensor at x=20, y=1: closest beacon is at x=15, y=3
    "};

    #[test]
    fn single_sensor_coverage() {
        let sensors = parse("Sensor at x=8, y=7: closest beacon is at x=2, y=10");
        assert_eq!(sensors[0].radius, 9);
        assert_eq!(sensors[0].covers(10), Some((2, 14)));
        assert_eq!(sensors[0].covers(17), None);
    }

    #[test]
    fn example() {
        let solution = solve_with(EXAMPLE, 10, 20);
        assert_eq!(solution, Solution::new(26, 56000011));
    }
}
