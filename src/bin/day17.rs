use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const WIDTH: usize = 7;

/// How many of the top rows make up the fingerprint of the tower's surface.
const SURFACE_DEPTH: usize = 32;

/// Rock shapes as row bitmasks, bottom row first, already shifted to start two
/// units from the left wall. Bit 6 is the leftmost column.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];

const LEFT_WALL: u8 = 1 << (WIDTH - 1);
const RIGHT_WALL: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet {
    Left,
    Right,
}

fn parse(input: &str) -> Vec<Jet> {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '<' => Jet::Left,
            '>' => Jet::Right,
            _ => panic!("Unrecognized jet: {:?}", c),
        })
        .collect()
}

fn push(rock: &[u8], jet: Jet) -> Option<Vec<u8>> {
    match jet {
        Jet::Left if rock.iter().all(|row| row & LEFT_WALL == 0) => {
            Some(rock.iter().map(|row| row << 1).collect())
        }
        Jet::Right if rock.iter().all(|row| row & RIGHT_WALL == 0) => {
            Some(rock.iter().map(|row| row >> 1).collect())
        }
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct Chamber<'a> {
    jets: &'a [Jet],
    next_jet: usize,
    rows: Vec<u8>,
    dropped: u64,
}

impl<'a> Chamber<'a> {
    fn new(jets: &'a [Jet]) -> Self {
        Chamber {
            jets,
            next_jet: 0,
            rows: Vec::new(),
            dropped: 0,
        }
    }

    fn height(&self) -> u64 {
        self.rows.len() as u64
    }

    fn collides(&self, rock: &[u8], bottom: usize) -> bool {
        rock.iter()
            .zip(self.rows.iter().skip(bottom))
            .any(|(shape, settled)| shape & settled != 0)
    }

    fn drop_rock(&mut self) {
        let mut rock = ROCKS[(self.dropped % ROCKS.len() as u64) as usize].to_vec();
        let mut bottom = self.rows.len() + 3;

        loop {
            let jet = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();

            if let Some(pushed) = push(&rock, jet) {
                if !self.collides(&pushed, bottom) {
                    rock = pushed;
                }
            }

            if bottom == 0 || self.collides(&rock, bottom - 1) {
                break;
            }
            bottom -= 1;
        }

        for (offset, shape) in rock.into_iter().enumerate() {
            let y = bottom + offset;
            if y >= self.rows.len() {
                self.rows.resize(y + 1, 0);
            }
            self.rows[y] |= shape;
        }

        self.dropped += 1;
    }

    fn surface(&self) -> Vec<u8> {
        self.rows.iter().rev().take(SURFACE_DEPTH).copied().collect()
    }
}

/// Height of the tower once `rocks` rocks have settled. The rock and jet
/// sequences both repeat, so once the same (rock, jet, surface) state comes
/// round again the whole number of remaining cycles is skipped.
fn tower_height(jets: &[Jet], rocks: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut seen = HashMap::new();
    let mut skipped: Option<u64> = None;

    while chamber.dropped < rocks {
        chamber.drop_rock();

        if skipped.is_some() {
            continue;
        }

        let key = (
            chamber.dropped % ROCKS.len() as u64,
            chamber.next_jet,
            chamber.surface(),
        );

        match seen.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert((chamber.dropped, chamber.height()));
            }
            Entry::Occupied(entry) => {
                let (then_dropped, then_height) = *entry.get();
                let period = chamber.dropped - then_dropped;
                let growth = chamber.height() - then_height;
                let cycles = (rocks - chamber.dropped) / period;

                tracing::debug!(period, growth, cycles, "tower repeats");

                chamber.dropped += cycles * period;
                skipped = Some(cycles * growth);
            }
        }
    }

    chamber.height() + skipped.unwrap_or(0)
}

fn solve(input: &str) -> impl Display {
    let jets = parse(input);
    Solution::new(
        tower_height(&jets, 2022),
        tower_height(&jets, 1_000_000_000_000),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn first_rocks() {
        let jets = parse(EXAMPLE);
        let mut chamber = Chamber::new(&jets);
        chamber.drop_rock();
        assert_eq!(chamber.rows, [0b0011110]);
        chamber.drop_rock();
        assert_eq!(chamber.height(), 4);
    }

    #[test]
    fn short_tower() {
        let jets = parse(EXAMPLE);
        assert_eq!(tower_height(&jets, 10), 17);
    }

    #[test]
    fn example() {
        assert_eq!(
            solve(EXAMPLE).to_string(),
            "Part 1: 3068\nPart 2: 1514285714288"
        );
    }
}
