use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;

use gridly::prelude::*;
use gridly_grids::VecGrid;
use lazy_static::lazy_static;
use regex::Regex;

use advent::threed::{Pos3, UNIT_X, UNIT_Y, UNIT_Z};
use advent::twod::{Dir, Pos};
use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

lazy_static! {
    static ref STEP: Regex = Regex::new(r"\d+|[LR]").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tile {
    #[default]
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward(u32),
    Left,
    Right,
}

#[derive(Debug, Clone)]
struct Board {
    grid: VecGrid<Tile>,
    height: i64,
    width: i64,
}

impl Board {
    fn tile(&self, pos: Pos) -> Tile {
        self.grid
            .get(Location::new(Row(pos.row as isize), Column(pos.col as isize)))
            .ok()
            .copied()
            .unwrap_or(Tile::Void)
    }

    fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos::new(row, col)))
    }

    fn start(&self) -> Pos {
        (0..self.width)
            .map(|col| Pos::new(0, col))
            .find(|&pos| self.tile(pos) == Tile::Open)
            .expect("No open tile in the top row")
    }
}

fn parse(input: &str) -> (Board, Vec<Step>) {
    let input = input.replace("\r\n", "\n");
    let (map, path) = input
        .split_once("\n\n")
        .expect("Missing blank line between the map and the path");

    let lines: Vec<&str> = map.lines().collect();
    let height = lines.len();
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

    let mut grid: VecGrid<Tile> = VecGrid::new(Rows(height as isize) + Columns(width as isize))
        .unwrap_or_else(|| panic!("Can't build a {}x{} board", height, width));

    for (row, line) in (0..height as isize).map(Row).zip(lines.iter()) {
        for (col, c) in (0..width as isize).map(Column).zip(line.bytes()) {
            grid[(row, col)] = match c {
                b' ' => Tile::Void,
                b'.' => Tile::Open,
                b'#' => Tile::Wall,
                _ => panic!("Unrecognized tile: {:?}", c as char),
            };
        }
    }

    let steps = STEP
        .find_iter(path)
        .map(|step| match step.as_str() {
            "L" => Step::Left,
            "R" => Step::Right,
            count => Step::Forward(
                count
                    .parse()
                    .unwrap_or_else(|err| panic!("Bad step count {:?}: {}", count, err)),
            ),
        })
        .collect();

    let board = Board {
        grid,
        height: height as i64,
        width: width as i64,
    };

    (board, steps)
}

/// Where you end up, and facing which way, after stepping off the edge of
/// the map from `pos`.
trait Wrap {
    fn wrap(&self, pos: Pos, dir: Dir) -> (Pos, Dir);
}

/// Reappear on the far side of the same row or column.
struct Flat<'a>(&'a Board);

impl Wrap for Flat<'_> {
    fn wrap(&self, pos: Pos, dir: Dir) -> (Pos, Dir) {
        let back = dir.reverse();
        let mut pos = pos;
        while self.0.tile(pos + back) != Tile::Void {
            pos += back;
        }
        (pos, dir)
    }
}

/// Orientation of one face of the net once it's folded onto the cube: its
/// outward normal, and which way its map columns and rows run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    normal: Pos3,
    right: Pos3,
    down: Pos3,
}

impl Frame {
    fn vector(&self, dir: Dir) -> Pos3 {
        match dir {
            Dir::Right => self.right,
            Dir::Left => -self.right,
            Dir::Down => self.down,
            Dir::Up => -self.down,
        }
    }

    /// The frame of the face next to this one in the net, in `dir`. Folding
    /// along the shared edge turns that face's normal towards `dir`.
    fn neighbor(&self, dir: Dir) -> Frame {
        let Frame {
            normal,
            right,
            down,
        } = *self;

        match dir {
            Dir::Right => Frame {
                normal: right,
                right: -normal,
                down,
            },
            Dir::Left => Frame {
                normal: -right,
                right: normal,
                down,
            },
            Dir::Down => Frame {
                normal: down,
                right,
                down: -normal,
            },
            Dir::Up => Frame {
                normal: -down,
                right,
                down: normal,
            },
        }
    }

    fn facing(&self, vector: Pos3) -> Dir {
        Dir::ALL
            .iter()
            .copied()
            .find(|&dir| self.vector(dir) == vector)
            .unwrap_or_else(|| panic!("{} doesn't lie in this face", vector))
    }
}

/// The map folded onto a cube of side `size`. Each face is keyed by the map
/// position of its top-left tile.
#[derive(Debug, Clone)]
struct Cube {
    size: i64,
    faces: HashMap<Pos, Frame>,
}

impl Cube {
    fn fold(board: &Board) -> Cube {
        let tiles = board
            .positions()
            .filter(|&pos| board.tile(pos) != Tile::Void)
            .count() as i64;

        let size = (1..)
            .find(|&n| 6 * n * n >= tiles)
            .expect("Tile count fits in an i64");
        assert_eq!(6 * size * size, tiles, "The map doesn't fold into a cube");

        let corners: HashSet<Pos> = board
            .positions()
            .filter(|pos| pos.row % size == 0 && pos.col % size == 0)
            .filter(|&pos| board.tile(pos) != Tile::Void)
            .collect();

        let first = *corners.iter().min().expect("Empty map");
        let mut faces = HashMap::new();
        let mut queue = VecDeque::new();

        faces.insert(
            first,
            Frame {
                normal: UNIT_Z,
                right: UNIT_X,
                down: UNIT_Y,
            },
        );
        queue.push_back(first);

        while let Some(corner) = queue.pop_front() {
            let frame = faces[&corner];
            for &dir in &Dir::ALL {
                let next = corner + dir.offset() * size;
                if corners.contains(&next) && !faces.contains_key(&next) {
                    faces.insert(next, frame.neighbor(dir));
                    queue.push_back(next);
                }
            }
        }

        assert_eq!(faces.len(), 6, "The net isn't connected");
        tracing::debug!(size, "folded cube");

        Cube { size, faces }
    }

    fn corner_of(&self, pos: Pos) -> Pos {
        Pos::new(pos.row - pos.row % self.size, pos.col - pos.col % self.size)
    }
}

// Tiles sit at doubled coordinates on a cube spanning -size..=size, so a
// tile's center is always an integer point.
impl Wrap for Cube {
    fn wrap(&self, pos: Pos, dir: Dir) -> (Pos, Dir) {
        let n = self.size;
        let corner = self.corner_of(pos);
        let here = self.faces[&corner];
        let local = pos - corner;

        let point = here.normal * n
            + here.right * (2 * local.col - n + 1)
            + here.down * (2 * local.row - n + 1);

        let heading = here.vector(dir);
        let point = point + heading - here.normal;

        let (&target, there) = self
            .faces
            .iter()
            .find(|(_, frame)| frame.normal == heading)
            .expect("Every direction has a face");

        let offset = point - there.normal * n;
        let local = Pos::new(
            (offset.dot(there.down) + n - 1) / 2,
            (offset.dot(there.right) + n - 1) / 2,
        );

        (target + local, there.facing(-here.normal))
    }
}

fn facing_value(dir: Dir) -> i64 {
    match dir {
        Dir::Right => 0,
        Dir::Down => 1,
        Dir::Left => 2,
        Dir::Up => 3,
    }
}

fn walk(board: &Board, steps: &[Step], wrap: &impl Wrap) -> i64 {
    let mut pos = board.start();
    let mut dir = Dir::Right;

    for &step in steps {
        match step {
            Step::Left => dir = dir.turn_left(),
            Step::Right => dir = dir.turn_right(),
            Step::Forward(count) => {
                for _ in 0..count {
                    let (next, next_dir) = match board.tile(pos + dir) {
                        Tile::Void => wrap.wrap(pos, dir),
                        _ => (pos + dir, dir),
                    };

                    if board.tile(next) == Tile::Wall {
                        break;
                    }

                    pos = next;
                    dir = next_dir;
                }
            }
        }
    }

    tracing::debug!(%pos, ?dir, "finished walking");
    1000 * (pos.row + 1) + 4 * (pos.col + 1) + facing_value(dir)
}

fn solve(input: &str) -> impl Display {
    let (board, steps) = parse(input);
    let cube = Cube::fold(&board);

    Solution::new(
        walk(&board, &steps, &Flat(&board)),
        walk(&board, &steps, &cube),
    )
}
