#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::collections::{HashMap, VecDeque};
use std::fmt::Display;

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

use advent::{run, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref VALVE: Regex = Regex::new(
        r"Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? ([\w, ]+)"
    )
    .unwrap();
}

const START: &str = "AA";

/// The valves worth opening, with travel times between them. Valves with a
/// zero flow rate only matter as corridors, so they're folded into the
/// distances.
#[derive(Debug, Clone)]
struct Network {
    rates: Vec<u32>,
    from_start: Vec<u32>,
    distances: Vec<Vec<u32>>,
}

/// Shortest hop counts from `from` to every valve.
fn bfs(tunnels: &[Vec<usize>], from: usize) -> Vec<u32> {
    let mut dist = vec![u32::MAX; tunnels.len()];
    dist[from] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(valve) = queue.pop_front() {
        for &next in &tunnels[valve] {
            if dist[next] == u32::MAX {
                dist[next] = dist[valve] + 1;
                queue.push_back(next);
            }
        }
    }

    dist
}

fn parse(input: &str) -> Network {
    let reports: Vec<(&str, u32, Vec<&str>)> = VALVE
        .captures_iter(input)
        .map(|caps| {
            let leads = caps.field(3).split(',').map(str::trim).collect();
            (caps.field(1), caps.parse(2), leads)
        })
        .collect();

    let index: HashMap<&str, usize> = reports
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect();

    let lookup = |name: &str| -> usize {
        *index
            .get(name)
            .unwrap_or_else(|| panic!("Tunnel to unknown valve {:?}", name))
    };

    let tunnels: Vec<Vec<usize>> = reports
        .iter()
        .map(|(_, _, leads)| leads.iter().map(|&name| lookup(name)).collect())
        .collect();

    let useful: Vec<usize> = (0..reports.len()).filter(|&i| reports[i].1 > 0).collect();
    assert!(
        useful.len() < usize::BITS as usize,
        "Too many working valves for a bitmask"
    );

    let start = bfs(&tunnels, lookup(START));
    let distances = useful
        .iter()
        .map(|&from| {
            let dist = bfs(&tunnels, from);
            useful.iter().map(|&to| dist[to]).collect()
        })
        .collect();

    Network {
        rates: useful.iter().map(|&i| reports[i].1).collect(),
        from_start: useful.iter().map(|&i| start[i]).collect(),
        distances,
    }
}

impl Network {
    /// The most pressure releasable in `minutes` when opening exactly the set
    /// of valves in each bitmask (0 for sets that can't all be reached).
    /// Unreachable valves have a distance of `u32::MAX` and are never opened.
    fn best_by_set(&self, minutes: u32) -> Vec<u32> {
        let mut best = vec![0; 1 << self.rates.len()];

        for (valve, &distance) in self.from_start.iter().enumerate() {
            if distance.saturating_add(1) < minutes {
                let left = minutes - distance - 1;
                self.explore(valve, left, 1 << valve, left * self.rates[valve], &mut best);
            }
        }

        best
    }

    fn explore(&self, at: usize, minutes_left: u32, opened: usize, released: u32, best: &mut [u32]) {
        best[opened] = best[opened].max(released);

        for next in 0..self.rates.len() {
            let bit = 1 << next;
            if opened & bit != 0 {
                continue;
            }

            let cost = self.distances[at][next].saturating_add(1);
            if cost < minutes_left {
                let left = minutes_left - cost;
                self.explore(next, left, opened | bit, released + left * self.rates[next], best);
            }
        }
    }
}

fn alone(network: &Network) -> u32 {
    network.best_by_set(30).into_iter().max().unwrap_or(0)
}

/// You and the elephant open disjoint sets of valves, so the answer is the
/// best pair of disjoint sets.
fn with_elephant(network: &Network) -> u32 {
    let best = network.best_by_set(26);
    let full = best.len() - 1;

    // within[set]: the best over every subset of `set`.
    let mut within = best.clone();
    for bit in 0..network.rates.len() {
        for set in 0..within.len() {
            if set & (1 << bit) != 0 {
                within[set] = within[set].max(within[set ^ (1 << bit)]);
            }
        }
    }

    (0..best.len())
        .into_par_iter()
        .map(|mine| best[mine] + within[full & !mine])
        .max()
        .unwrap_or(0)
}

fn solve(input: &str) -> impl Display {
    let network = parse(input);
    tracing::debug!(working = network.rates.len(), "valves worth opening");

    Solution::new(alone(&network), with_elephant(&network))
}
