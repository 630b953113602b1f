use std::fmt::Display;

use advent::{run, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

/// Number of characters read once the last `size` of them are all different.
fn marker_end(signal: &[u8], size: usize) -> Option<usize> {
    signal
        .windows(size)
        .position(|window| {
            window
                .iter()
                .enumerate()
                .all(|(i, c)| !window[i + 1..].contains(c))
        })
        .map(|start| start + size)
}

fn solve(input: &str) -> impl Display {
    let signal = input.trim().as_bytes();

    let packet = marker_end(signal, 4).expect("No start-of-packet marker");
    let message = marker_end(signal, 14).expect("No start-of-message marker");

    Solution::new(packet, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_markers() {
        let cases = [
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11),
        ];

        for &(signal, expected) in &cases {
            assert_eq!(marker_end(signal.as_bytes(), 4), Some(expected), "{}", signal);
        }
    }

    #[test]
    fn example() {
        assert_eq!(
            solve("mjqjpqmgbljsphdztnvjfqwrcgsmlb").to_string(),
            "Part 1: 7\nPart 2: 19"
        );
    }

    #[test]
    fn too_short() {
        assert_eq!(marker_end(b"abc", 4), None);
        assert_eq!(marker_end(b"aaaaaaa", 4), None);
    }
}
