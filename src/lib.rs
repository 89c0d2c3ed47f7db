//! # levenshtein
//!
//! Edit distance between a reference string and a list of candidates, with
//! three ways of reporting it: raw distances, candidates within a cutoff,
//! and the best matches.
//!
//! Distances are classic Levenshtein distances over raw bytes: insertions,
//! deletions and substitutions each cost 1.
//!
//! ## Example
//!
//! ```rust
//! use levenshtein::prelude::*;
//!
//! assert_eq!(distance(b"kitten", b"sitting"), 3);
//!
//! let mut interpreter = Interpreter::new(Vec::new());
//! interpreter.run(["levenshtein", "cat", "cat", "bat", "dog", "-b"]).unwrap();
//! assert_eq!(interpreter.into_inner(), b"cat\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod interpreter;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{distance, str_distance, Sequence};
    pub use crate::interpreter::{
        Action, Completion, Flow, InterpretError, Interpreter, ResultSlot,
    };
}
