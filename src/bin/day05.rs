use std::fmt::Display;

use joinery::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;

use advent::{run, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref MOVE: Regex = Regex::new(r"move (\d+) from (\d+) to (\d+)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

type Stacks = Vec<Vec<char>>;

/// Parse the drawing. The last line numbers the stacks; crate labels sit in
/// the columns above each number, so the drawing is read bottom-up.
fn parse_stacks(drawing: &str) -> Stacks {
    let mut lines = drawing.lines().rev();
    let labels = lines.next().expect("Empty stack drawing");

    let columns: Vec<usize> = labels
        .char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .collect();

    let mut stacks: Stacks = vec![Vec::new(); columns.len()];

    for line in lines {
        let line = line.as_bytes();
        for (stack, &column) in stacks.iter_mut().zip(columns.iter()) {
            match line.get(column) {
                Some(&label) if label.is_ascii_alphabetic() => stack.push(label as char),
                _ => {}
            }
        }
    }

    stacks
}

fn parse(input: &str) -> (Stacks, Vec<Move>) {
    let input = input.replace("\r\n", "\n");
    let (drawing, moves) = input
        .split_once("\n\n")
        .expect("Missing blank line between drawing and moves");

    let moves = MOVE
        .captures_iter(moves)
        .map(|caps| Move {
            count: caps.parse(1),
            from: caps.parse::<usize>(2) - 1,
            to: caps.parse::<usize>(3) - 1,
        })
        .collect();

    (parse_stacks(drawing), moves)
}

/// Apply every move. With `keep_order` a whole batch moves at once, otherwise
/// crates move one at a time (and end up reversed).
fn rearrange(mut stacks: Stacks, moves: &[Move], keep_order: bool) -> Stacks {
    for m in moves {
        let from = &mut stacks[m.from];
        let split = from
            .len()
            .checked_sub(m.count)
            .unwrap_or_else(|| panic!("Not enough crates for {:?}", m));
        let mut lifted = from.split_off(split);

        if !keep_order {
            lifted.reverse();
        }

        stacks[m.to].extend(lifted);
    }

    stacks
}

fn tops(stacks: &Stacks) -> String {
    stacks
        .iter()
        .filter_map(|stack| stack.last())
        .join_with("")
        .to_string()
}

fn solve(input: &str) -> impl Display {
    let (stacks, moves) = parse(input);

    let one_at_a_time = rearrange(stacks.clone(), &moves, false);
    let all_at_once = rearrange(stacks, &moves, true);

    Solution::new(tops(&one_at_a_time), tops(&all_at_once))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
            [D]
        [N] [C]
        [Z] [M] [P]
         1   2   3

        move 1 from 2 to 1
        move 3 from 1 to 3
        move 2 from 2 to 1
        move 1 from 1 to 2
    "};

    #[test]
    fn drawing() {
        let (stacks, moves) = parse(EXAMPLE);
        assert_eq!(stacks, vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[1], Move { count: 3, from: 0, to: 2 });
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: CMZ\nPart 2: MCD");
    }
}
