use std::fmt::Display;
use std::iter;

use gridly::prelude::*;
use gridly_grids::VecGrid;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

fn parse(input: &str) -> VecGrid<u8> {
    let lines: Vec<&[u8]> = input.lines().map(|line| line.trim().as_bytes()).collect();
    let height = lines.len() as isize;
    let width = lines.first().map_or(0, |line| line.len()) as isize;

    let mut grid: VecGrid<u8> = VecGrid::new(Rows(height) + Columns(width))
        .unwrap_or_else(|| panic!("Can't build a {}x{} forest", height, width));

    for (row, line) in (0..height).map(Row).zip(lines.iter()) {
        for (col, &c) in (0..width).map(Column).zip(line.iter()) {
            if !c.is_ascii_digit() {
                panic!("Not a tree height: {:?}", c as char);
            }
            grid[(row, col)] = c - b'0';
        }
    }

    grid
}

/// Heights of the trees seen looking from `from` towards the edge.
fn sight_line(
    grid: &VecGrid<u8>,
    from: Location,
    direction: Direction,
) -> impl Iterator<Item = u8> + '_ {
    let mut loc = from;
    iter::from_fn(move || {
        loc = loc + direction;
        grid.get(loc).ok().copied()
    })
}

fn visible(grid: &VecGrid<u8>, loc: Location) -> bool {
    let height = grid[loc];
    DIRECTIONS
        .iter()
        .any(|&direction| sight_line(grid, loc, direction).all(|tree| tree < height))
}

fn scenic_score(grid: &VecGrid<u8>, loc: Location) -> usize {
    let height = grid[loc];
    DIRECTIONS
        .iter()
        .map(|&direction| {
            let mut seen = 0;
            for tree in sight_line(grid, loc, direction) {
                seen += 1;
                if tree >= height {
                    break;
                }
            }
            seen
        })
        .product()
}

fn solve(input: &str) -> impl Display {
    let grid = parse(input);
    let trees = || grid.row_range().cross(grid.column_range());

    let visible_count = trees().filter(|&loc| visible(&grid, loc)).count();
    let best_view = trees()
        .map(|loc| scenic_score(&grid, loc))
        .max()
        .unwrap_or(0);

    Solution::new(visible_count, best_view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        30373
        25512
        65332
        33549
        35390
    "};

    #[test]
    fn scenic_scores() {
        let grid = parse(EXAMPLE);
        assert_eq!(scenic_score(&grid, Location::new(Row(1), Column(2))), 4);
        assert_eq!(scenic_score(&grid, Location::new(Row(3), Column(2))), 8);
    }

    #[test]
    fn edges_are_visible() {
        let grid = parse(EXAMPLE);
        assert!(visible(&grid, Location::new(Row(0), Column(0))));
        assert!(!visible(&grid, Location::new(Row(2), Column(2))));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 21\nPart 2: 8");
    }
}
