use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use advent::{run, BetterIterator, RegexExtractor, RegexMatcher, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref MONKEY: Regex = Regex::new(
        r"(?x)
        Monkey\ (?P<id>\d+):\s+
        Starting\ items:\ (?P<items>[\d,\ ]*)\s+
        Operation:\ new\ =\ old\ (?P<op>[*+])\ (?P<operand>old|\d+)\s+
        Test:\ divisible\ by\ (?P<divisor>\d+)\s+
        If\ true:\ throw\ to\ monkey\ (?P<if_true>\d+)\s+
        If\ false:\ throw\ to\ monkey\ (?P<if_false>\d+)"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(value) => old + value,
            Operation::Multiply(value) => old * value,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
    inspected: u64,
}

impl Monkey {
    fn target(&self, worry: u64) -> usize {
        if worry % self.divisor == 0 {
            self.if_true
        } else {
            self.if_false
        }
    }
}

fn parse(input: &str) -> Vec<Monkey> {
    let input = input.replace("\r\n", "\n");

    input
        .split("\n\n")
        .enumerate()
        .map(|(index, block)| {
            let caps = MONKEY.must_captures(block.trim());
            let id: usize = caps.parse_named("id");
            assert_eq!(id, index, "Monkeys out of order");

            let operation = match (caps.named("op"), caps.named("operand")) {
                ("*", "old") => Operation::Square,
                ("*", _) => Operation::Multiply(caps.parse_named("operand")),
                ("+", "old") => Operation::Multiply(2),
                ("+", _) => Operation::Add(caps.parse_named("operand")),
                (op, _) => panic!("Unrecognized operator {:?}", op),
            };

            Monkey {
                items: caps
                    .named("items")
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| {
                        item.parse()
                            .unwrap_or_else(|err| panic!("Bad item {:?}: {}", item, err))
                    })
                    .collect(),
                operation,
                divisor: caps.parse_named("divisor"),
                if_true: caps.parse_named("if_true"),
                if_false: caps.parse_named("if_false"),
                inspected: 0,
            }
        })
        .collect()
}

/// Play `rounds` rounds of keep-away and return the monkey business level.
///
/// Without relief the worry levels grow without bound, but every test is a
/// divisibility check, so they can be kept modulo the product of all the
/// divisors without changing where any item goes. (With relief that doesn't
/// hold, since dividing by 3 doesn't commute with the modulus.)
fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: bool) -> u64 {
    let modulus: u64 = monkeys.iter().map(|monkey| monkey.divisor).product();

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            monkeys[i].inspected += items.len() as u64;

            for item in items {
                let monkey = &monkeys[i];
                let mut worry = monkey.operation.apply(item);
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }

                let target = monkey.target(worry);
                monkeys[target].items.push(worry);
            }
        }
    }

    for (i, monkey) in monkeys.iter().enumerate() {
        tracing::debug!("Monkey {} inspected items {} times", i, monkey.inspected);
    }

    monkeys
        .iter()
        .map(|monkey| monkey.inspected)
        .top_n(2)
        .iter()
        .product()
}

fn solve(input: &str) -> impl Display {
    let monkeys = parse(input);

    Solution::new(
        monkey_business(monkeys.clone(), 20, true),
        monkey_business(monkeys, 10_000, false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Monkey 0:
          Starting items: 79, 98
          Operation: new = old * 19
          Test: divisible by 23
            If true: throw to monkey 2
            If false: throw to monkey 3

        Monkey 1:
          Starting items: 54, 65, 75, 74
          Operation: new = old + 6
          Test: divisible by 19
            If true: throw to monkey 2
            If false: throw to monkey 0

        Monkey 2:
          Starting items: 79, 60, 97
          Operation: new = old * old
          Test: divisible by 13
            If true: throw to monkey 1
            If false: throw to monkey 3

        Monkey 3:
          Starting items: 74
          Operation: new = old + 3
          Test: divisible by 17
            If true: throw to monkey 0
            If false: throw to monkey 1
    "};

    #[test]
    fn parses_monkeys() {
        let monkeys = parse(EXAMPLE);
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[1].items, [54, 65, 75, 74]);
        assert_eq!(monkeys[2].operation, Operation::Square);
        assert_eq!(monkeys[3].divisor, 17);
        assert_eq!((monkeys[0].if_true, monkeys[0].if_false), (2, 3));
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 10605\nPart 2: 2713310158");
    }
}
