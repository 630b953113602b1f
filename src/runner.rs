use std::fmt::{self, Display, Formatter};
use std::io::{self, Read};
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[inline(always)]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

pub trait ReadString: Read {
    fn read_string(&mut self) -> io::Result<String> {
        let mut data = String::new();
        self.read_to_string(&mut data).map(|_| data)
    }
}

impl<T: Read> ReadString for T {}

/// The answers to both halves of a day's puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solution<A, B> {
    pub part1: A,
    pub part2: B,
}

impl<A, B> Solution<A, B> {
    pub fn new(part1: A, part2: B) -> Self {
        Solution { part1, part2 }
    }
}

impl<A: Display, B: Display> Display for Solution<A, B> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}

/// Diagnostics go to stderr so stdout only ever carries answers. `RUST_LOG`
/// overrides the default `info` level; `debug` shows the intermediate values
/// each day logs along the way.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. two runs in one process) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Read all of stdin, solve it, print the solution.
///
/// Only trailing whitespace is stripped from the input: a couple of days
/// (the crate stacks, the monkey map) carry meaning in leading spaces.
pub fn run<D: Display>(solve: impl FnOnce(&str) -> D) -> anyhow::Result<()> {
    init_logger();

    let (result, total_duration) = timed(move || -> anyhow::Result<()> {
        let input = io::stdin()
            .read_string()
            .context("Error reading input")?;

        let (solution, duration) = timed(move || solve(input.trim_end()));
        println!("{}", solution);

        tracing::info!(?duration, "algorithm duration");
        Ok(())
    });

    tracing::info!(?total_duration, "total duration");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_prints_one_line_per_part() {
        let solution = Solution::new(24000, "CMZ");
        assert_eq!(solution.to_string(), "Part 1: 24000\nPart 2: CMZ");
    }

    #[test]
    fn read_string_reads_everything() {
        let mut source: &[u8] = b"1000\n2000\n\n3000\n";
        assert_eq!(source.read_string().unwrap(), "1000\n2000\n\n3000\n");
    }
}
