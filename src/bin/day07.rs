use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;

type NodeId = usize;

#[derive(Debug, Clone)]
enum Entry {
    File { size: u64 },
    Dir { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    entry: Entry,
}

/// A filesystem tree stored as an arena; the root is always node 0.
#[derive(Debug, Clone)]
struct FileSystem {
    nodes: Vec<Node>,
}

const ROOT: NodeId = 0;

impl FileSystem {
    fn new() -> Self {
        FileSystem {
            nodes: vec![Node {
                name: "/".to_owned(),
                parent: None,
                entry: Entry::Dir {
                    children: Vec::new(),
                },
            }],
        }
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id].entry {
            Entry::Dir { children } => children,
            Entry::File { .. } => &[],
        }
    }

    fn child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.nodes[child].name == name)
    }

    /// Add an entry under `parent`, unless one with that name is already
    /// there (listing a directory twice shouldn't double its size).
    fn add(&mut self, parent: NodeId, name: &str, entry: Entry) -> NodeId {
        if let Some(existing) = self.child_named(parent, name) {
            return existing;
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_owned(),
            parent: Some(parent),
            entry,
        });

        match &mut self.nodes[parent].entry {
            Entry::Dir { children } => children.push(id),
            Entry::File { .. } => panic!("{} is a file, not a directory", self.nodes[parent].name),
        }

        id
    }

    fn is_dir(&self, id: NodeId) -> bool {
        matches!(self.nodes[id].entry, Entry::Dir { .. })
    }

    /// Total size of every node, computed in one pass. Children always have
    /// larger ids than their parents, so walking backwards visits them first.
    fn sizes(&self) -> Vec<u64> {
        let mut sizes = vec![0; self.nodes.len()];

        for id in (0..self.nodes.len()).rev() {
            if let Entry::File { size } = self.nodes[id].entry {
                sizes[id] = size;
            }
            if let Some(parent) = self.nodes[id].parent {
                sizes[parent] += sizes[id];
            }
        }

        sizes
    }
}

fn parse(input: &str) -> FileSystem {
    let mut fs = FileSystem::new();
    let mut cwd = ROOT;

    for line in input.lines().map(str::trim) {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["$", "cd", "/"] => cwd = ROOT,
            ["$", "cd", ".."] => cwd = fs.nodes[cwd].parent.unwrap_or(ROOT),
            ["$", "cd", name] => {
                cwd = fs.add(
                    cwd,
                    name,
                    Entry::Dir {
                        children: Vec::new(),
                    },
                )
            }
            ["$", "ls"] => {}
            ["dir", name] => {
                fs.add(
                    cwd,
                    name,
                    Entry::Dir {
                        children: Vec::new(),
                    },
                );
            }
            [size, name] => {
                let size = size
                    .parse()
                    .unwrap_or_else(|err| panic!("Bad file size in {:?}: {}", line, err));
                fs.add(cwd, name, Entry::File { size });
            }
            [] => {}
            _ => panic!("Unrecognized line: {:?}", line),
        }
    }

    fs
}

fn solve(input: &str) -> impl Display {
    let fs = parse(input);
    let sizes = fs.sizes();

    let dir_sizes: Vec<u64> = (0..fs.nodes.len())
        .filter(|&id| fs.is_dir(id))
        .map(|id| sizes[id])
        .collect();

    let small: u64 = dir_sizes.iter().filter(|&&size| size <= SMALL_DIR).sum();

    let to_free = (NEEDED_SPACE + sizes[ROOT]).saturating_sub(DISK_SIZE);
    tracing::debug!(used = sizes[ROOT], to_free, "disk usage");

    let victim = dir_sizes
        .iter()
        .copied()
        .filter(|&size| size >= to_free)
        .min()
        .expect("No directory is big enough");

    Solution::new(small, victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        $ cd /
        $ ls
        dir a
        14848514 b.txt
        8504156 c.dat
        dir d
        $ cd a
        $ ls
        dir e
        29116 f
        2557 g
        62596 h.lst
        $ cd e
        $ ls
        584 i
        $ cd ..
        $ cd ..
        $ cd d
        $ ls
        4060174 j
        8033020 d.log
        5626152 d.ext
        7214296 k
    "};

    #[test]
    fn directory_sizes() {
        let fs = parse(EXAMPLE);
        let sizes = fs.sizes();

        let size_of = |path: &[&str]| {
            let id = path.iter().fold(ROOT, |id, name| {
                fs.child_named(id, name).expect("missing directory")
            });
            sizes[id]
        };

        assert_eq!(size_of(&["a", "e"]), 584);
        assert_eq!(size_of(&["a"]), 94853);
        assert_eq!(size_of(&["d"]), 24933642);
        assert_eq!(size_of(&[]), 48381165);
    }

    #[test]
    fn relisting_does_not_double_count() {
        let twice = format!("{}$ cd /\n$ ls\n14848514 b.txt\n", EXAMPLE);
        assert_eq!(parse(&twice).sizes()[ROOT], 48381165);
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).to_string(), "Part 1: 95437\nPart 2: 24933642");
    }
}
