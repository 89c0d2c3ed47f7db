//! Per-argument result buffer.

use smallvec::SmallVec;

use crate::distance::Sequence;

/// Runs with up to this many arguments keep their results inline.
pub const INLINE_SLOTS: usize = 64;

/// Outcome recorded for one processed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSlot {
    /// A flag, the source, or a cutoff value: takes no part in aggregation.
    NotTarget,

    /// A target measured against the source.
    Target {
        /// The target string, kept for cutoff replay and best-match output.
        candidate: Sequence,
        /// Its edit distance from the source.
        distance: usize,
    },
}

impl ResultSlot {
    /// The distance, if this slot holds a target.
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::Target { distance, .. } => Some(*distance),
            Self::NotTarget => None,
        }
    }
}

/// Results in argument order. Never shrinks during a run.
#[derive(Debug, Default, Clone)]
pub struct Results {
    slots: SmallVec<[ResultSlot; INLINE_SLOTS]>,
}

impl Results {
    /// Make room for `additional` more arguments.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    pub(crate) fn push_not_target(&mut self) {
        self.slots.push(ResultSlot::NotTarget);
    }

    pub(crate) fn push_target(&mut self, candidate: Sequence, distance: usize) {
        self.slots.push(ResultSlot::Target {
            candidate,
            distance,
        });
    }

    /// All slots, in argument order.
    pub fn slots(&self) -> &[ResultSlot] {
        &self.slots
    }

    /// Targets and their distances, in argument order.
    pub fn targets(&self) -> impl Iterator<Item = (&Sequence, usize)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            ResultSlot::Target {
                candidate,
                distance,
            } => Some((candidate, *distance)),
            ResultSlot::NotTarget => None,
        })
    }

    /// Number of targets seen so far.
    pub fn target_count(&self) -> usize {
        self.targets().count()
    }

    /// Smallest distance among the targets, or `None` when there are none.
    pub fn best(&self) -> Option<usize> {
        self.targets().map(|(_, distance)| distance).min()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True before any argument was processed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once the buffer has moved off the inline storage.
    pub fn spilled(&self) -> bool {
        self.slots.spilled()
    }
}
