use crate::constants::DEFAULT_SEPARATORS;
use std::collections::BTreeSet;
use std::fmt;

/// Characters treated as token delimiters. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    pub fn new(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// A set with no members; nothing ever splits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from command-line words.
    ///
    /// No words means the default of space and tab. Otherwise every character
    /// of every word is a member, as if the words were concatenated.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args.is_empty() {
            return Self::new(DEFAULT_SEPARATORS);
        }
        args.iter().flat_map(|a| a.as_ref().chars()).collect()
    }

    #[inline]
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for SeparatorSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("\"")?;
        for c in &self.chars {
            write!(f, "{}", c.escape_default())?;
        }
        f.write_str("\"")
    }
}
