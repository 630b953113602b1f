//! Shared plumbing for the 2022 puzzle solutions.
//!
//! Every day lives in its own binary under `src/bin`. Each one reads its puzzle
//! input from stdin, hands it to a `solve` function, and prints whatever that
//! function returns. The helpers in here are the bits that kept getting pasted
//! between days: the runner, regex capture extraction, and 2D / 3D coordinates.

pub mod error;
pub mod iter_ext;
pub mod regex_ext;
pub mod runner;
pub mod threed;
pub mod twod;

pub use crate::error::ParseError;
pub use crate::iter_ext::BetterIterator;
pub use crate::regex_ext::{RegexExtractor, RegexMatcher};
pub use crate::runner::{run, timed, ReadString, Solution};
