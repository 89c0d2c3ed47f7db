use std::ffi::OsString;
use std::fmt;

/// An immutable byte buffer measured by [`distance`](super::distance).
///
/// Sequences carry raw bytes: command-line arguments are taken as their
/// platform encoding and never validated as UTF-8.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Box<[u8]>);

impl Sequence {
    /// Create a sequence from anything that yields bytes.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Edit distance from `self` to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Sequence) -> usize {
        super::distance(&self.0, &other.0)
    }

    /// True when the sequence starts with the flag marker `-`.
    #[inline]
    pub fn is_flag(&self) -> bool {
        self.0.first() == Some(&b'-')
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Sequence {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<OsString> for Sequence {
    fn from(s: OsString) -> Self {
        Self::from(s.into_encoded_bytes())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
