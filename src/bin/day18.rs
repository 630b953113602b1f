use std::collections::{HashSet, VecDeque};
use std::fmt::Display;

use advent::threed::Pos3;
use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

fn parse(input: &str) -> HashSet<Pos3> {
    input
        .lines()
        .map(|line| {
            line.parse()
                .unwrap_or_else(|err| panic!("Bad cube {:?}: {}", line, err))
        })
        .collect()
}

/// Faces not touching another cube, including faces of air pockets.
fn surface_area(cubes: &HashSet<Pos3>) -> usize {
    cubes
        .iter()
        .flat_map(|cube| cube.neighbors())
        .filter(|side| !cubes.contains(side))
        .count()
}

/// Faces reachable by steam from outside. Floods the air in a box one unit
/// larger than the droplet and counts every time the flood bumps into lava.
fn exterior_area(cubes: &HashSet<Pos3>) -> usize {
    let (low, high) = match cubes.iter().copied().reduce(|a, b| a.min(b)) {
        None => return 0,
        Some(min) => {
            let max = cubes.iter().fold(min, |acc, &cube| acc.max(cube));
            let margin = Pos3::new(1, 1, 1);
            (min - margin, max + margin)
        }
    };

    let mut steam = HashSet::new();
    let mut queue = VecDeque::new();
    let mut faces = 0;

    steam.insert(low);
    queue.push_back(low);

    while let Some(air) = queue.pop_front() {
        for next in air.neighbors().filter(|next| next.within(low, high)) {
            if cubes.contains(&next) {
                faces += 1;
            } else if steam.insert(next) {
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(steam = steam.len(), "flood filled");
    faces
}

fn solve(input: &str) -> impl Display {
    let cubes = parse(input);
    Solution::new(surface_area(&cubes), exterior_area(&cubes))
}
