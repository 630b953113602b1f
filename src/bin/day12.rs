use std::collections::VecDeque;
use std::fmt::Display;

use gridly::prelude::*;
use gridly_grids::VecGrid;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

#[derive(Debug, Clone)]
struct Heightmap {
    heights: VecGrid<u8>,
    start: Location,
    end: Location,
}

fn parse(input: &str) -> Heightmap {
    let lines: Vec<&[u8]> = input.lines().map(|line| line.trim().as_bytes()).collect();
    let height = lines.len() as isize;
    let width = lines.first().map_or(0, |line| line.len()) as isize;

    let mut heights: VecGrid<u8> = VecGrid::new(Rows(height) + Columns(width))
        .unwrap_or_else(|| panic!("Can't build a {}x{} map", height, width));
    let mut start = None;
    let mut end = None;

    for (row, line) in (0..height).map(Row).zip(lines.iter()) {
        for (col, &c) in (0..width).map(Column).zip(line.iter()) {
            let loc = Location::new(row, col);
            heights[loc] = match c {
                b'S' => {
                    start = Some(loc);
                    0
                }
                b'E' => {
                    end = Some(loc);
                    b'z' - b'a'
                }
                b'a'..=b'z' => c - b'a',
                _ => panic!("Unrecognized square: {:?}", c as char),
            };
        }
    }

    Heightmap {
        heights,
        start: start.expect("No start square"),
        end: end.expect("No end square"),
    }
}

/// Fewest steps from every square to the end, or `None` if it can't get
/// there. Searches backwards from the end so one BFS answers both parts.
fn steps_to_end(map: &Heightmap) -> VecGrid<Option<usize>> {
    let mut steps: VecGrid<Option<usize>> = VecGrid::new(map.heights.dimensions())
        .unwrap_or_else(|| panic!("Can't build the step grid"));

    steps[map.end] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(map.end);

    while let Some(loc) = queue.pop_front() {
        let distance = steps[loc].unwrap_or(0);
        let height = map.heights[loc];

        for &direction in DIRECTIONS.iter() {
            let prev = loc + direction;

            // Going forwards, a step may climb at most one.
            let reachable = match map.heights.get(prev) {
                Ok(&prev_height) => height <= prev_height + 1,
                Err(_) => false,
            };

            if reachable && steps[prev].is_none() {
                steps[prev] = Some(distance + 1);
                queue.push_back(prev);
            }
        }
    }

    steps
}

fn solve(input: &str) -> impl Display {
    let map = parse(input);
    let steps = steps_to_end(&map);

    let from_start = steps[map.start].expect("The end is unreachable from the start");

    let scenic = map
        .heights
        .row_range()
        .cross(map.heights.column_range())
        .filter(|&loc| map.heights[loc] == 0)
        .filter_map(|loc| steps[loc])
        .min()
        .unwrap_or(from_start);

    Solution::new(from_start, scenic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Sabqponm
        abcryxxl
        accszExk
        acctuvwj
        abdefghi
    "};

    #[test]
    fn start_and_end() {
        let map = parse(EXAMPLE);
        assert_eq!(map.start, Location::new(Row(0), Column(0)));
        assert_eq!(map.end, Location::new(Row(2), Column(5)));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 31\nPart 2: 29");
    }
}
