use std::fmt::Display;

use lazy_format::lazy_format;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const WIDTH: usize = 40;
const HEIGHT: usize = 6;

/// The X register's value during each cycle, starting with cycle 1.
fn register_trace(input: &str) -> Vec<i64> {
    let mut x = 1;
    let mut trace = Vec::new();

    for line in input.lines().map(str::trim) {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("noop"), None) => trace.push(x),
            (Some("addx"), Some(value)) => {
                trace.push(x);
                trace.push(x);
                x += value
                    .parse::<i64>()
                    .unwrap_or_else(|err| panic!("Bad addx operand {:?}: {}", line, err));
            }
            _ => panic!("Unrecognized instruction: {:?}", line),
        }
    }

    trace
}

fn signal_strength(trace: &[i64]) -> i64 {
    trace
        .iter()
        .zip(1..)
        .skip(19)
        .step_by(40)
        .take(6)
        .map(|(&x, cycle)| x * cycle)
        .sum()
}

/// Draw the CRT: pixel `col` of each row is lit while the 3-wide sprite
/// centered on X covers it.
fn render(trace: &[i64]) -> String {
    let lit: Vec<char> = trace
        .iter()
        .take(WIDTH * HEIGHT)
        .enumerate()
        .map(|(cycle, &x)| {
            let col = (cycle % WIDTH) as i64;
            if (x - col).abs() <= 1 {
                '#'
            } else {
                '.'
            }
        })
        .collect();

    let screen = lazy_format!("\n{row}" for row in lit.chunks(WIDTH).map(|row| row.iter().collect::<String>()));
    screen.to_string()
}

fn solve(input: &str) -> impl Display {
    let trace = register_trace(input);
    Solution::new(signal_strength(&trace), render(&trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        addx 15
        addx -11
        addx 6
        addx -3
        addx 5
        addx -1
        addx -8
        addx 13
        addx 4
        noop
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx -35
        addx 1
        addx 24
        addx -19
        addx 1
        addx 16
        addx -11
        noop
        noop
        addx 21
        addx -15
        noop
        noop
        addx -3
        addx 9
        addx 1
        addx -3
        addx 8
        addx 1
        addx 5
        noop
        noop
        noop
        noop
        noop
        addx -36
        noop
        addx 1
        addx 7
        noop
        noop
        noop
        addx 2
        addx 6
        noop
        noop
        noop
        noop
        noop
        addx 1
        noop
        noop
        addx 7
        addx 1
        noop
        addx -13
        addx 13
        addx 7
        noop
        addx 1
        addx -33
        noop
        noop
        noop
        addx 2
        noop
        noop
        noop
        addx 8
        noop
        addx -1
        addx 2
        addx 1
        noop
        addx 17
        addx -9
        addx 1
        addx 1
        addx -3
        addx 11
        noop
        noop
        addx 1
        noop
        addx 1
        noop
        noop
        addx -13
        addx -19
        addx 1
        addx 3
        addx 26
        addx -30
        addx 12
        addx -1
        addx 3
        addx 1
        noop
        noop
        noop
        addx -9
        addx 18
        addx 1
        addx 2
        noop
        noop
        addx 9
        noop
        noop
        noop
        addx -1
        addx 2
        addx -37
        addx 1
        addx 3
        noop
        addx 15
        addx -21
        addx 22
        addx -6
        addx 1
        noop
        addx 2
        addx 1
        noop
        addx -10
        noop
        noop
        addx 20
        addx 1
        addx 2
        addx 2
        addx -6
        addx -11
        noop
        noop
        noop
    "};

    const EXAMPLE_SCREEN: &str = indoc! {"

        ##..##..##..##..##..##..##..##..##..##..
        ###...###...###...###...###...###...###.
        ####....####....####....####....####....
        #####.....#####.....#####.....#####.....
        ######......######......######......####
        #######.......#######.......#######....."};

    #[test]
    fn small_program() {
        assert_eq!(register_trace("noop\naddx 3\naddx -5"), [1, 1, 1, 4, 4]);
    }

    #[test]
    fn signal() {
        assert_eq!(signal_strength(&register_trace(EXAMPLE)), 13140);
    }

    #[test]
    fn signal_stops_at_cycle_220() {
        assert_eq!(signal_strength(&[1; 300]), 720);
    }

    #[test]
    fn screen() {
        assert_eq!(render(&register_trace(EXAMPLE)), EXAMPLE_SCREEN);
    }
}
