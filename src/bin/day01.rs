use std::fmt::Display;

use advent::{run, BetterIterator, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// Calories carried by each elf. Elves are separated by blank lines.
fn elf_totals(input: &str) -> Vec<u64> {
    input
        .split("\n\n")
        .map(|elf| {
            elf.lines()
                .map(|line| {
                    line.trim()
                        .parse::<u64>()
                        .unwrap_or_else(|err| panic!("Bad calorie count {:?}: {}", line, err))
                })
                .sum()
        })
        .collect()
}

fn solve(input: &str) -> impl Display {
    let top = elf_totals(&input.replace("\r\n", "\n")).into_iter().top_n(3);
    tracing::debug!(?top, "heaviest elves");

    Solution::new(top[0], top.iter().sum::<u64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1000
        2000
        3000

        4000

        5000
        6000

        7000
        8000
        9000

        10000
    "};

    #[test]
    fn totals() {
        assert_eq!(elf_totals(EXAMPLE.trim_end()), [6000, 4000, 11000, 24000, 10000]);
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE.trim_end()).to_string(), "Part 1: 24000\nPart 2: 45000");
    }
}
