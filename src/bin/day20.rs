use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const DECRYPTION_KEY: i64 = 811_589_153;

fn parse(input: &str) -> Vec<i64> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse()
                .unwrap_or_else(|err| panic!("Bad number {:?}: {}", line, err))
        })
        .collect()
}

/// Mix the file `rounds` times. The result is circular, so where it starts
/// is arbitrary.
fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
    let len = numbers.len();
    if len < 2 {
        return numbers.to_vec();
    }

    // Indexes into `numbers`, in their current circular order.
    let mut order: Vec<usize> = (0..len).collect();

    for _ in 0..rounds {
        for (id, &value) in numbers.iter().enumerate() {
            let from = order
                .iter()
                .position(|&other| other == id)
                .expect("Every number stays in the file");
            order.remove(from);

            // With the number lifted out there are only len - 1 gaps to land in.
            let to = (from as i64 + value).rem_euclid(len as i64 - 1) as usize;
            order.insert(to, id);
        }
    }

    order.into_iter().map(|id| numbers[id]).collect()
}

fn grove_coordinates(mixed: &[i64]) -> i64 {
    let zero = mixed
        .iter()
        .position(|&value| value == 0)
        .unwrap_or_else(|| panic!("No 0 in the file"));

    [1000, 2000, 3000]
        .iter()
        .map(|offset| mixed[(zero + offset) % mixed.len()])
        .sum()
}

fn solve(input: &str) -> impl Display {
    let numbers = parse(input);
    let decrypted: Vec<i64> = numbers.iter().map(|value| value * DECRYPTION_KEY).collect();

    Solution::new(
        grove_coordinates(&mix(&numbers, 1)),
        grove_coordinates(&mix(&decrypted, 10)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4";

    /// Rotate to start at 1, the way the puzzle text prints it.
    fn from_one(mixed: Vec<i64>) -> Vec<i64> {
        let start = mixed.iter().position(|&value| value == 1).unwrap();
        mixed[start..].iter().chain(&mixed[..start]).copied().collect()
    }

    #[test]
    fn single_mix() {
        let mixed = mix(&parse(EXAMPLE), 1);
        assert_eq!(from_one(mixed.clone()), [1, 2, -3, 4, 0, 3, -2]);
        assert_eq!(grove_coordinates(&mixed), 3);
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 3\nPart 2: 1623178306");
    }
}
