//! Single-pass interpretation of the argument stream.
//!
//! Arguments are consumed left to right. The first non-flag argument is the
//! source; every later non-flag argument is a target measured against it.
//! Action flags may appear anywhere, including after targets: every target's
//! distance is buffered regardless of the current action, so that choosing
//! an action late can replay what was already measured, in argument order.
//!
//! ```rust
//! use levenshtein::interpreter::{Completion, Interpreter};
//!
//! let mut interpreter = Interpreter::new(Vec::new());
//! let completion = interpreter
//!     .run(["levenshtein", "cat", "cat", "bat", "dog", "--cutoff", "1"])
//!     .unwrap();
//!
//! assert_eq!(completion, Completion::Finished);
//! assert_eq!(interpreter.into_inner(), b"cat\nbat\n");
//! ```

use std::io::Write;

use tracing::{debug, trace, warn};

use crate::distance::Sequence;

mod action;
mod error;
mod slot;

pub use action::{parse_cutoff, Action, Flag};
pub use error::{InterpretError, Result};
pub use slot::{ResultSlot, Results, INLINE_SLOTS};

/// What the caller should do after a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep feeding tokens.
    Continue,
    /// `--help` was seen: print usage and stop without finalizing.
    Help,
}

/// How a full run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// All arguments processed and results finalized.
    Finished,
    /// Stopped at `--help`.
    Help,
}

/// Routes each computed distance to `out` according to the selected
/// [`Action`].
///
/// Output is one distance or one target per line, never reordered across
/// targets.
pub struct Interpreter<W> {
    out: W,
    action: Action,
    source: Option<Sequence>,
    results: Results,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            action: Action::Undecided,
            source: None,
            results: Results::default(),
        }
    }

    /// Currently selected action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The source, once seen.
    pub fn source(&self) -> Option<&Sequence> {
        self.source.as_ref()
    }

    /// Results recorded so far.
    pub fn results(&self) -> &Results {
        &self.results
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Process a whole argument vector.
    ///
    /// The first item names the program and is skipped. Stops early on
    /// `--help` (without finalizing) or on the first error.
    pub fn run<I, T>(&mut self, args: I) -> Result<Completion>
    where
        I: IntoIterator<Item = T>,
        T: Into<Sequence>,
    {
        let mut args = args.into_iter();

        if let Some(program) = args.next() {
            let program: Sequence = program.into();
            trace!(program = %program, "starting");
        }
        self.results.reserve(args.size_hint().0);

        for token in args {
            if self.feed(token)? == Flow::Help {
                return Ok(Completion::Help);
            }
        }

        self.finish()?;
        Ok(Completion::Finished)
    }

    /// Classify and process one argument.
    pub fn feed(&mut self, token: impl Into<Sequence>) -> Result<Flow> {
        let token = token.into();
        trace!(argument = %token, action = ?self.action, "processing argument");

        if self.action == Action::ExpectingCutoffNumber {
            let cutoff = parse_cutoff(token.as_bytes())?;
            self.select_cutoff(cutoff)?;
            self.results.push_not_target();
            return Ok(Flow::Continue);
        }

        if token.is_flag() {
            return self.feed_flag(&token);
        }

        let distance = match &self.source {
            Some(source) => source.distance_to(&token),
            None => {
                debug!(source = %token, "source set");
                self.source = Some(token);
                self.results.push_not_target();
                return Ok(Flow::Continue);
            }
        };
        debug!(candidate = %token, distance, "computed distance");

        match self.action {
            Action::ComputeAll => writeln!(self.out, "{distance}")?,
            Action::CutoffFilter { cutoff } if distance <= cutoff => {
                write_line(&mut self.out, token.as_bytes())?
            }
            _ => {}
        }

        self.results.push_target(token, distance);
        Ok(Flow::Continue)
    }

    /// Finalize after the last argument.
    ///
    /// Requires a source and at least one target. Undecided runs print every
    /// buffered distance; best-match runs print every target tied for the
    /// minimum distance. Other actions already printed incrementally, and a
    /// `--cutoff` still waiting for its value prints nothing.
    pub fn finish(&mut self) -> Result<()> {
        if self.source.is_none() || self.results.target_count() == 0 {
            return Err(InterpretError::InsufficientArguments);
        }

        match self.action {
            Action::Undecided => {
                for (_, distance) in self.results.targets() {
                    writeln!(self.out, "{distance}")?;
                }
            }
            Action::Best => {
                if let Some(best) = self.results.best() {
                    debug!(best, "best distance");
                    for (candidate, distance) in self.results.targets() {
                        if distance == best {
                            write_line(&mut self.out, candidate.as_bytes())?;
                        }
                    }
                }
            }
            Action::ExpectingCutoffNumber => {
                warn!("--cutoff given without a value, nothing to print");
            }
            Action::ComputeAll | Action::CutoffFilter { .. } => {}
        }

        self.out.flush()?;
        Ok(())
    }

    fn feed_flag(&mut self, token: &Sequence) -> Result<Flow> {
        match Flag::parse(token.as_bytes()) {
            Flag::Help => return Ok(Flow::Help),
            Flag::Cutoff => self.action.choose(Action::ExpectingCutoffNumber)?,
            Flag::Distance => {
                self.action.choose(Action::ComputeAll)?;
                for (_, distance) in self.results.targets() {
                    writeln!(self.out, "{distance}")?;
                }
            }
            Flag::Best => self.action.choose(Action::Best)?,
            Flag::Unknown => warn!(flag = %token, "ignoring unrecognized flag"),
        }
        debug!(action = ?self.action, "flag processed");

        self.results.push_not_target();
        Ok(Flow::Continue)
    }

    /// Enter cutoff mode and replay the targets already measured.
    fn select_cutoff(&mut self, cutoff: usize) -> Result<()> {
        self.action = Action::CutoffFilter { cutoff };
        debug!(cutoff, "cutoff set");

        for (candidate, distance) in self.results.targets() {
            if distance <= cutoff {
                write_line(&mut self.out, candidate.as_bytes())?;
            }
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}
