use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use advent::twod::{Dir, Pos, ADJACENT};
use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// Each direction an elf considers, with the indexes into `ADJACENT` that
/// must be empty for it to propose moving that way.
const PROPOSALS: [(Dir, [usize; 3]); 4] = [
    (Dir::Up, [7, 0, 1]),
    (Dir::Down, [3, 4, 5]),
    (Dir::Left, [5, 6, 7]),
    (Dir::Right, [1, 2, 3]),
];

fn parse(input: &str) -> HashSet<Pos> {
    input
        .lines()
        .enumerate()
        .flat_map(|(row, line)| {
            line.trim()
                .char_indices()
                .filter(|&(_, c)| c == '#')
                .map(move |(col, _)| Pos::new(row as i64, col as i64))
        })
        .collect()
}

fn proposal(elves: &HashSet<Pos>, elf: Pos, round: usize) -> Option<Pos> {
    let occupied: Vec<bool> = ADJACENT
        .iter()
        .map(|&offset| elves.contains(&(elf + offset)))
        .collect();

    if !occupied.contains(&true) {
        return None;
    }

    (0..PROPOSALS.len())
        .map(|i| PROPOSALS[(round + i) % PROPOSALS.len()])
        .find(|(_, checks)| checks.iter().all(|&check| !occupied[check]))
        .map(|(dir, _)| elf + dir)
}

/// Run one round. Returns false if no elf moved.
fn spread(elves: &mut HashSet<Pos>, round: usize) -> bool {
    let current: &HashSet<Pos> = elves;
    let proposals: Vec<(Pos, Pos)> = current
        .iter()
        .filter_map(|&elf| proposal(current, elf, round).map(|to| (elf, to)))
        .collect();

    let mut interest: HashMap<Pos, usize> = HashMap::new();
    for &(_, to) in &proposals {
        *interest.entry(to).or_default() += 1;
    }

    let mut moved = false;
    for (from, to) in proposals {
        if interest[&to] == 1 {
            elves.remove(&from);
            elves.insert(to);
            moved = true;
        }
    }

    moved
}

fn empty_ground(elves: &HashSet<Pos>) -> i64 {
    let rows = elves.iter().map(|elf| elf.row);
    let cols = elves.iter().map(|elf| elf.col);

    match (rows.clone().min(), rows.max(), cols.clone().min(), cols.max()) {
        (Some(top), Some(bottom), Some(left), Some(right)) => {
            (bottom - top + 1) * (right - left + 1) - elves.len() as i64
        }
        _ => 0,
    }
}

fn solve(input: &str) -> impl Display {
    let mut elves = parse(input);
    let mut empty = 0;
    let mut settled = None;
    let mut rounds = 0;

    // Keep going until both the 10th round and the first still round are seen.
    while rounds < 10 || settled.is_none() {
        let moved = spread(&mut elves, rounds);
        rounds += 1;

        if rounds == 10 {
            empty = empty_ground(&elves);
        }
        if !moved && settled.is_none() {
            settled = Some(rounds);
        }
    }
    tracing::debug!(elves = elves.len(), rounds, "settled");

    Solution::new(empty, settled.unwrap_or(rounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ....#..
        ..###.#
        #...##.
        .#...##
        #.###..
        ##.#.##
        .#..#..
    "};

    #[test]
    fn small_example() {
        let mut elves = parse(".....\n..##.\n..#..\n.....\n..##.\n.....");
        for round in 0..3 {
            assert!(spread(&mut elves, round));
        }
        assert!(!spread(&mut elves, 3));

        let expected = parse("..#..\n....#\n#....\n....#\n.....\n..#..");
        assert_eq!(elves, expected);
    }

    #[test]
    fn settles_before_tenth_round() {
        let small = ".....\n..##.\n..#..\n.....\n..##.\n.....";
        assert_eq!(solve(small).to_string(), "Part 1: 25\nPart 2: 4");
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 110\nPart 2: 20");
    }
}
