use std::collections::HashSet;
use std::fmt::Display;

use advent::twod::{Dir, Pos};
use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// The inside of the valley, walls stripped. The entrance sits just above the
/// top-left cell and the exit just below the bottom-right one.
#[derive(Debug, Clone)]
struct Valley {
    blizzards: Vec<Vec<Option<Dir>>>,
    height: i64,
    width: i64,
}

fn parse(input: &str) -> Valley {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();
    if lines.len() < 3 {
        panic!("Valley is too small: {:?}", input);
    }

    let blizzards: Vec<Vec<Option<Dir>>> = lines[1..lines.len() - 1]
        .iter()
        .map(|line| {
            let inner = &line[1..line.len() - 1];
            inner
                .chars()
                .map(|c| match c {
                    '.' => None,
                    c => Some(
                        c.to_string()
                            .parse()
                            .unwrap_or_else(|err| panic!("Bad valley cell {:?}: {}", c, err)),
                    ),
                })
                .collect()
        })
        .collect();

    let height = blizzards.len() as i64;
    let width = blizzards.first().map_or(0, |row| row.len()) as i64;

    Valley {
        blizzards,
        height,
        width,
    }
}

impl Valley {
    fn entrance(&self) -> Pos {
        Pos::new(-1, 0)
    }

    fn exit(&self) -> Pos {
        Pos::new(self.height, self.width - 1)
    }

    fn blizzard(&self, row: i64, col: i64) -> Option<Dir> {
        let row = row.rem_euclid(self.height) as usize;
        let col = col.rem_euclid(self.width) as usize;
        self.blizzards[row][col]
    }

    /// Blizzards wrap around, so the one that would be over `pos` at `minute`
    /// started `minute` cells upwind of it.
    fn open(&self, pos: Pos, minute: i64) -> bool {
        if pos == self.entrance() || pos == self.exit() {
            return true;
        }

        if !(0..self.height).contains(&pos.row) || !(0..self.width).contains(&pos.col) {
            return false;
        }

        let Pos { row, col } = pos;
        self.blizzard(row, col - minute) != Some(Dir::Right)
            && self.blizzard(row, col + minute) != Some(Dir::Left)
            && self.blizzard(row - minute, col) != Some(Dir::Down)
            && self.blizzard(row + minute, col) != Some(Dir::Up)
    }

    /// The minute you first reach `to`, leaving `from` at minute `start`.
    fn cross(&self, from: Pos, to: Pos, start: i64) -> i64 {
        let mut reachable = HashSet::new();
        reachable.insert(from);
        let mut minute = start;

        loop {
            minute += 1;
            reachable = reachable
                .iter()
                .flat_map(|&pos| std::iter::once(pos).chain(pos.neighbors()))
                .filter(|&pos| self.open(pos, minute))
                .collect();

            if reachable.contains(&to) {
                return minute;
            }

            if reachable.is_empty() {
                panic!("Trapped by blizzards on the way from {} to {}", from, to);
            }
        }
    }
}

fn solve(input: &str) -> impl Display {
    let valley = parse(input);
    let (entrance, exit) = (valley.entrance(), valley.exit());

    let there = valley.cross(entrance, exit, 0);
    let back = valley.cross(exit, entrance, there);
    let again = valley.cross(entrance, exit, back);
    tracing::debug!(there, back, again, "trips");

    Solution::new(there, again)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.######
        #>>.<^<#
        #.<..<<#
        #>v.><>#
        #<^v^^>#
        ######.#
    "};

    #[test]
    fn blizzards_move() {
        let valley = parse(EXAMPLE);
        assert_eq!((valley.height, valley.width), (4, 6));
        assert!(!valley.open(Pos::new(0, 0), 0));
        // The two > blizzards in the top row have moved on after a minute.
        assert!(valley.open(Pos::new(0, 0), 1));
        assert!(!valley.open(Pos::new(0, 5), 0));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 18\nPart 2: 54");
    }
}
