use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

use Shape::*;

impl Shape {
    fn from_letter(letter: &str) -> Self {
        match letter {
            "A" | "X" => Rock,
            "B" | "Y" => Paper,
            "C" | "Z" => Scissors,
            _ => panic!("Unrecognized shape: {:?}", letter),
        }
    }

    fn score(self) -> u32 {
        match self {
            Rock => 1,
            Paper => 2,
            Scissors => 3,
        }
    }

    /// The shape this one beats.
    fn beats(self) -> Shape {
        match self {
            Rock => Scissors,
            Paper => Rock,
            Scissors => Paper,
        }
    }

    fn loses_to(self) -> Shape {
        match self {
            Rock => Paper,
            Paper => Scissors,
            Scissors => Rock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    fn from_letter(letter: &str) -> Self {
        match letter {
            "X" => Outcome::Lose,
            "Y" => Outcome::Draw,
            "Z" => Outcome::Win,
            _ => panic!("Unrecognized outcome: {:?}", letter),
        }
    }

    fn score(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// What to throw against `opponent` to get this outcome.
    fn choose(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Lose => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.loses_to(),
        }
    }
}

fn play(opponent: Shape, you: Shape) -> Outcome {
    if opponent == you {
        Outcome::Draw
    } else if you.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

fn round_score(opponent: Shape, you: Shape) -> u32 {
    you.score() + play(opponent, you).score()
}

fn solve(input: &str) -> impl Display {
    let rounds: Vec<(&str, &str)> = input
        .lines()
        .map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(them), Some(us)) => (them, us),
                _ => panic!("Malformed round: {:?}", line),
            }
        })
        .collect();

    let as_shapes: u32 = rounds
        .iter()
        .map(|&(them, us)| round_score(Shape::from_letter(them), Shape::from_letter(us)))
        .sum();

    let as_outcomes: u32 = rounds
        .iter()
        .map(|&(them, us)| {
            let opponent = Shape::from_letter(them);
            round_score(opponent, Outcome::from_letter(us).choose(opponent))
        })
        .sum();

    Solution::new(as_shapes, as_outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rounds() {
        assert_eq!(round_score(Rock, Paper), 8);
        assert_eq!(round_score(Paper, Rock), 1);
        assert_eq!(round_score(Scissors, Scissors), 6);
    }

    #[test]
    fn example() {
        let solution = solve("A Y\nB X\nC Z");
        assert_eq!(solution.to_string(), "Part 1: 15\nPart 2: 12");
    }
}
