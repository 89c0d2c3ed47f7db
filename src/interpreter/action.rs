//! Selected output action and flag recognition.

use super::error::{InterpretError, Result};

/// What the interpreter does with each computed distance.
///
/// At most one of `ComputeAll`, `CutoffFilter` and `Best` is chosen per run.
/// `ExpectingCutoffNumber` only lasts until the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// No action flag seen yet. Distances are buffered and printed at the end.
    #[default]
    Undecided,

    /// Print every distance as soon as it is known.
    ComputeAll,

    /// Print targets within `cutoff` edits of the source.
    CutoffFilter {
        /// Inclusive upper bound on the distance.
        cutoff: usize,
    },

    /// Print the targets tied for the smallest distance, at end of input.
    Best,

    /// `--cutoff` was seen; the next token must be its value.
    ExpectingCutoffNumber,
}

impl Action {
    /// Switch to `next`, refusing if an action was already chosen.
    pub(crate) fn choose(&mut self, next: Action) -> Result<()> {
        if *self != Action::Undecided {
            return Err(InterpretError::ConflictingAction);
        }
        *self = next;
        Ok(())
    }

    /// The active cutoff, only present in `CutoffFilter` mode.
    pub fn cutoff(&self) -> Option<usize> {
        match self {
            Self::CutoffFilter { cutoff } => Some(*cutoff),
            _ => None,
        }
    }
}

/// A token starting with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `--help` / `-h`
    Help,
    /// `--cutoff` / `-c`
    Cutoff,
    /// `--distance` / `-d`
    Distance,
    /// `--best` / `-b`
    Best,
    /// Anything else with a leading `-`.
    Unknown,
}

impl Flag {
    /// Recognize a flag token.
    pub fn parse(token: &[u8]) -> Self {
        match token {
            b"--help" | b"-h" => Self::Help,
            b"--cutoff" | b"-c" => Self::Cutoff,
            b"--distance" | b"-d" => Self::Distance,
            b"--best" | b"-b" => Self::Best,
            _ => Self::Unknown,
        }
    }
}

/// Parse the value of `--cutoff`: ASCII digits only, fitting a `usize`.
///
/// An empty value has no non-digit in it and reads as 0.
pub fn parse_cutoff(token: &[u8]) -> Result<usize> {
    let malformed =
        || InterpretError::MalformedCutoffValue(String::from_utf8_lossy(token).into_owned());

    if !token.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    if token.is_empty() {
        return Ok(0);
    }

    // All-ASCII at this point, so the UTF-8 check cannot fail.
    std::str::from_utf8(token)
        .ok()
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_once() {
        let mut action = Action::default();
        assert_eq!(action, Action::Undecided);
        action.choose(Action::Best).unwrap();
        assert_eq!(action, Action::Best);
    }

    #[test]
    fn test_choose_twice_conflicts() {
        let mut action = Action::ComputeAll;
        let err = action.choose(Action::Best).unwrap_err();
        assert!(matches!(err, InterpretError::ConflictingAction));
        assert_eq!(action, Action::ComputeAll);

        // A pending cutoff value also counts as chosen.
        let mut action = Action::ExpectingCutoffNumber;
        assert!(action.choose(Action::ExpectingCutoffNumber).is_err());
    }

    #[test]
    fn test_cutoff_only_in_filter_mode() {
        assert_eq!(Action::CutoffFilter { cutoff: 4 }.cutoff(), Some(4));
        assert_eq!(Action::Undecided.cutoff(), None);
        assert_eq!(Action::ExpectingCutoffNumber.cutoff(), None);
    }

    #[test]
    fn test_flag_parse() {
        assert_eq!(Flag::parse(b"-h"), Flag::Help);
        assert_eq!(Flag::parse(b"--help"), Flag::Help);
        assert_eq!(Flag::parse(b"-c"), Flag::Cutoff);
        assert_eq!(Flag::parse(b"--cutoff"), Flag::Cutoff);
        assert_eq!(Flag::parse(b"-d"), Flag::Distance);
        assert_eq!(Flag::parse(b"--distance"), Flag::Distance);
        assert_eq!(Flag::parse(b"-b"), Flag::Best);
        assert_eq!(Flag::parse(b"--best"), Flag::Best);
        assert_eq!(Flag::parse(b"-x"), Flag::Unknown);
        assert_eq!(Flag::parse(b"--cutoff=3"), Flag::Unknown);
        assert_eq!(Flag::parse(b"-"), Flag::Unknown);
    }

    #[test]
    fn test_parse_cutoff() {
        assert_eq!(parse_cutoff(b"0").unwrap(), 0);
        assert_eq!(parse_cutoff(b"2").unwrap(), 2);
        assert_eq!(parse_cutoff(b"007").unwrap(), 7);
    }

    #[test]
    fn test_parse_cutoff_empty_is_zero() {
        assert_eq!(parse_cutoff(b"").unwrap(), 0);
    }

    #[test]
    fn test_parse_cutoff_rejects() {
        for bad in [
            &b"abc"[..],
            &b"-1"[..],
            &b"+1"[..],
            &b"1.5"[..],
            &b" 1"[..],
            &b"99999999999999999999999999"[..],
        ] {
            let err = parse_cutoff(bad).unwrap_err();
            assert!(matches!(err, InterpretError::MalformedCutoffValue(_)), "{bad:?}");
        }
    }
}
