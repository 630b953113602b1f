use std::fmt::Display;

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

use advent::{run, RegexExtractor, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref BLUEPRINT: Regex = Regex::new(concat!(
        r"Blueprint (\d+):\s+",
        r"Each ore robot costs (\d+) ore.\s+",
        r"Each clay robot costs (\d+) ore.\s+",
        r"Each obsidian robot costs (\d+) ore and (\d+) clay.\s+",
        r"Each geode robot costs (\d+) ore and (\d+) obsidian.",
    ))
    .unwrap();
}

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

/// Costs are indexed by robot, then by material (ore, clay, obsidian).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Blueprint {
    id: u32,
    costs: [[u32; 3]; 4],
    max_spend: [u32; 3],
}

fn parse(input: &str) -> Vec<Blueprint> {
    BLUEPRINT
        .captures_iter(input)
        .map(|caps| {
            let mut costs = [[0; 3]; 4];
            costs[ORE][ORE] = caps.parse(2);
            costs[CLAY][ORE] = caps.parse(3);
            costs[OBSIDIAN][ORE] = caps.parse(4);
            costs[OBSIDIAN][CLAY] = caps.parse(5);
            costs[GEODE][ORE] = caps.parse(6);
            costs[GEODE][OBSIDIAN] = caps.parse(7);

            let mut max_spend = [0; 3];
            for cost in &costs {
                for (most, &amount) in max_spend.iter_mut().zip(cost) {
                    *most = (*most).max(amount);
                }
            }

            Blueprint {
                id: caps.parse(1),
                costs,
                max_spend,
            }
        })
        .collect()
}

/// Geodes are credited in full as soon as a geode robot is built, so they
/// don't need a robot count or stockpile.
#[derive(Debug, Clone, Copy)]
struct State {
    minutes_left: u32,
    robots: [u32; 3],
    stock: [u32; 3],
    geodes: u32,
}

impl Blueprint {
    /// Minutes until `robot` is finished, waiting for materials as needed.
    /// `None` if nothing is producing one of the materials it needs.
    fn build_time(&self, robot: usize, state: &State) -> Option<u32> {
        self.costs[robot]
            .iter()
            .zip(state.stock.iter().zip(&state.robots))
            .try_fold(0, |wait, (&cost, (&have, &rate))| {
                if cost <= have {
                    Some(wait)
                } else if rate == 0 {
                    None
                } else {
                    Some(wait.max((cost - have + rate - 1) / rate))
                }
            })
            .map(|wait| wait + 1)
    }

    fn search(&self, state: State, best: &mut u32) {
        *best = (*best).max(state.geodes);

        // Even a new geode robot every minute from now on can't catch up.
        let t = state.minutes_left;
        if state.geodes + t * t.saturating_sub(1) / 2 <= *best {
            return;
        }

        for robot in (ORE..=GEODE).rev() {
            if robot != GEODE && state.robots[robot] >= self.max_spend[robot] {
                continue;
            }

            let elapsed = match self.build_time(robot, &state) {
                Some(elapsed) if elapsed < t => elapsed,
                _ => continue,
            };

            let mut next = state;
            next.minutes_left = t - elapsed;
            for material in ORE..=OBSIDIAN {
                next.stock[material] = state.stock[material] + state.robots[material] * elapsed
                    - self.costs[robot][material];
            }

            if robot == GEODE {
                next.geodes += next.minutes_left;
            } else {
                next.robots[robot] += 1;
            }

            self.search(next, best);
        }
    }

    fn most_geodes(&self, minutes: u32) -> u32 {
        let start = State {
            minutes_left: minutes,
            robots: [1, 0, 0],
            stock: [0; 3],
            geodes: 0,
        };

        let mut best = 0;
        self.search(start, &mut best);
        tracing::debug!(blueprint = self.id, minutes, geodes = best, "searched");
        best
    }
}

fn quality_levels(blueprints: &[Blueprint]) -> u32 {
    blueprints
        .par_iter()
        .map(|blueprint| blueprint.id * blueprint.most_geodes(24))
        .sum()
}

fn uneaten_product(blueprints: &[Blueprint]) -> u32 {
    blueprints[..blueprints.len().min(3)]
        .par_iter()
        .map(|blueprint| blueprint.most_geodes(32))
        .product()
}

fn solve(input: &str) -> impl Display {
    let blueprints = parse(input);
    Solution::new(quality_levels(&blueprints), uneaten_product(&blueprints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Blueprint 1:
          Each ore robot costs 4 ore.
          Each clay robot costs 2 ore.
          Each obsidian robot costs 3 ore and 14 clay.
          Each geode robot costs 2 ore and 7 obsidian.

        Blueprint 2:
          Each ore robot costs 2 ore.
          Each clay robot costs 3 ore.
          Each obsidian robot costs 3 ore and 8 clay.
          Each geode robot costs 3 ore and 12 obsidian.
    "};

    #[test]
    fn parses_multiline_blueprints() {
        let blueprints = parse(EXAMPLE);
        assert_eq!(blueprints.len(), 2);
        assert_eq!(blueprints[1].costs[GEODE], [3, 0, 12]);
        assert_eq!(blueprints[0].max_spend, [4, 14, 7]);
    }

    #[test]
    fn single_blueprints() {
        let blueprints = parse(EXAMPLE);
        assert_eq!(blueprints[0].most_geodes(24), 9);
        assert_eq!(blueprints[1].most_geodes(24), 12);
        assert_eq!(blueprints[0].most_geodes(32), 56);
        assert_eq!(blueprints[1].most_geodes(32), 62);
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 33\nPart 2: 3472");
    }
}
