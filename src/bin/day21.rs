use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use advent::{run, ParseError, RegexExtractor, RegexMatcher, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref JOB: Regex =
        Regex::new(r"^(\w+): (?:(-?\d+)|(\w+) ([-+*/]) (\w+))$").unwrap();
}

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Op {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            _ => Err(ParseError::malformed("operation", s)),
        }
    }
}

impl Op {
    fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }

    /// The left operand that makes `lhs op rhs == result`.
    fn solve_lhs(self, rhs: i64, result: i64) -> i64 {
        match self {
            Op::Add => result - rhs,
            Op::Sub => result + rhs,
            Op::Mul => result / rhs,
            Op::Div => result * rhs,
        }
    }

    /// The right operand that makes `lhs op rhs == result`.
    fn solve_rhs(self, lhs: i64, result: i64) -> i64 {
        match self {
            Op::Add => result - lhs,
            Op::Sub => lhs - result,
            Op::Mul => result / lhs,
            Op::Div => lhs / result,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

#[derive(Debug, Clone)]
struct Troop<'a> {
    jobs: HashMap<&'a str, Job<'a>>,
}

fn parse(input: &str) -> Troop<'_> {
    let jobs = input
        .lines()
        .map(|line| {
            let caps = JOB.must_captures(line.trim());
            let job = match caps.get(2) {
                Some(_) => Job::Number(caps.parse(2)),
                None => Job::Math(caps.field(3), caps.parse(4), caps.field(5)),
            };
            (caps.field(1), job)
        })
        .collect();

    Troop { jobs }
}

impl<'a> Troop<'a> {
    fn job(&self, name: &str) -> Job<'a> {
        *self
            .jobs
            .get(name)
            .unwrap_or_else(|| panic!("No monkey named {:?}", name))
    }

    fn yell(&self, name: &str) -> i64 {
        match self.job(name) {
            Job::Number(value) => value,
            Job::Math(lhs, op, rhs) => op.apply(self.yell(lhs), self.yell(rhs)),
        }
    }

    fn depends_on_human(&self, name: &str) -> bool {
        name == HUMAN
            || match self.job(name) {
                Job::Number(_) => false,
                Job::Math(lhs, _, rhs) => {
                    self.depends_on_human(lhs) || self.depends_on_human(rhs)
                }
            }
    }

    /// What the human has to yell for `name` to yell `target`. Walks down the
    /// one branch that depends on the human, undoing each operation.
    fn solve_for_human(&self, name: &str, target: i64) -> i64 {
        if name == HUMAN {
            return target;
        }

        match self.job(name) {
            Job::Number(_) => panic!("{:?} doesn't depend on the human", name),
            Job::Math(lhs, op, rhs) => {
                if self.depends_on_human(lhs) {
                    self.solve_for_human(lhs, op.solve_lhs(self.yell(rhs), target))
                } else {
                    self.solve_for_human(rhs, op.solve_rhs(self.yell(lhs), target))
                }
            }
        }
    }

    /// The root checks its two operands for equality.
    fn human_yell(&self) -> i64 {
        match self.job(ROOT) {
            Job::Number(_) => panic!("The root monkey has to compare two others"),
            Job::Math(lhs, _, rhs) => {
                if self.depends_on_human(lhs) {
                    self.solve_for_human(lhs, self.yell(rhs))
                } else {
                    self.solve_for_human(rhs, self.yell(lhs))
                }
            }
        }
    }
}

fn solve(input: &str) -> impl Display {
    let troop = parse(input);
    tracing::debug!(monkeys = troop.jobs.len(), "parsed");
    Solution::new(troop.yell(ROOT), troop.human_yell())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        root: pppw + sjmn
        dbpl: 5
        cczh: sllz + lgvd
        zczc: 2
        ptdq: humn - dvpt
        dvpt: 3
        lfqf: 4
        humn: 5
        ljgn: 2
        sjmn: drzm * dbpl
        sllz: 4
        pppw: cczh / lfqf
        lgvd: ljgn * ptdq
        drzm: hmdt - zczc
        hmdt: 32
    "};

    #[test]
    fn inverse_operations() {
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            let result = op.apply(84, 4);
            assert_eq!(op.solve_lhs(4, result), 84, "{:?}", op);
            assert_eq!(op.solve_rhs(84, result), 4, "{:?}", op);
        }
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 152\nPart 2: 301");
    }
}
