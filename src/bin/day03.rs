use std::collections::HashSet;
use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

fn priority(item: u8) -> u32 {
    match item {
        b'a'..=b'z' => (item - b'a') as u32 + 1,
        b'A'..=b'Z' => (item - b'A') as u32 + 27,
        _ => panic!("Not an item: {:?}", item as char),
    }
}

fn items(s: &str) -> HashSet<u8> {
    s.bytes().collect()
}

/// The single item type present in every one of `sacks`.
fn shared<'a>(sacks: impl IntoIterator<Item = &'a str>) -> u8 {
    let common = sacks
        .into_iter()
        .map(items)
        .fold(None, |acc: Option<HashSet<u8>>, next| match acc {
            None => Some(next),
            Some(acc) => Some(acc.intersection(&next).copied().collect()),
        })
        .unwrap_or_default();

    let mut common = common.into_iter();
    match (common.next(), common.next()) {
        (Some(item), None) => item,
        _ => panic!("Expected exactly one shared item"),
    }
}

fn solve(input: &str) -> impl Display {
    let sacks: Vec<&str> = input.lines().map(str::trim).collect();

    let misplaced: u32 = sacks
        .iter()
        .map(|sack| {
            let (left, right) = sack.split_at(sack.len() / 2);
            priority(shared(vec![left, right]))
        })
        .sum();

    let badges: u32 = sacks
        .chunks(3)
        .map(|group| priority(shared(group.iter().copied())))
        .sum();

    Solution::new(misplaced, badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        vJrwpWtwJgWrhcsFMMfFFhFp
        jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
        PmmdzqPrVvPwwTWBwg
        wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
        ttgJtRGJQctTZtZT
        CrZsJsPPZsGzwwsLwLmpwMDw
    "};

    #[test]
    fn priorities() {
        assert_eq!(priority(b'p'), 16);
        assert_eq!(priority(b'L'), 38);
        assert_eq!(priority(b'Z'), 52);
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE.trim_end()).to_string(), "Part 1: 157\nPart 2: 70");
    }
}
