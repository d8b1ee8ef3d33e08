//! Maximal-run word splitting.
//!
//! A line is cut at every run of separator characters. Interior runs of any
//! length vanish. A run touching either end of the line leaves an empty token
//! on that side, so `",a,"` gives `["", "a", ""]` while `"a,,b"` gives
//! `["a", "b"]`.

use crate::separators::SeparatorSet;
use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Storage for the token list or a token could not be reserved.
    #[error("out of memory while splitting a line")]
    AllocationFailure,

    #[error("missing argument: {0}")]
    InvalidArgument(&'static str),
}

impl From<TryReserveError> for SplitError {
    fn from(_: TryReserveError) -> Self {
        SplitError::AllocationFailure
    }
}

/// Splitter bound to one separator set for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separators: SeparatorSet,
}

impl Tokenizer {
    pub fn new(separators: SeparatorSet) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    pub fn split(
        &self,
        input: &str,
    ) -> Result<Vec<String>, SplitError> {
        split(input, &self.separators)
    }
}

/// Number of tokens `split` produces for `input`. Never zero.
pub fn token_count(
    input: &str,
    separators: &SeparatorSet,
) -> usize {
    let is_sep = |c: char| separators.contains(c);
    if !input.contains(is_sep) {
        return 1;
    }
    let words = input.split(is_sep).filter(|w| !w.is_empty()).count();
    let leading = input.starts_with(is_sep) as usize;
    let trailing = input.ends_with(is_sep) as usize;
    leading + words + trailing
}

/// Splits `input` on runs of `separators`.
///
/// Empty input, an empty separator set, or input without any separator all
/// give a single token holding the whole input.
pub fn split(
    input: &str,
    separators: &SeparatorSet,
) -> Result<Vec<String>, SplitError> {
    let is_sep = |c: char| separators.contains(c);

    let mut tokens = Vec::new();
    if !input.contains(is_sep) {
        tokens.try_reserve_exact(1)?;
        tokens.push(copy_token(input)?);
        return Ok(tokens);
    }

    let words = input.split(is_sep).filter(|w| !w.is_empty()).count();
    let leading = input.starts_with(is_sep);
    let trailing = input.ends_with(is_sep);
    tokens.try_reserve_exact(leading as usize + words + trailing as usize)?;

    if leading {
        tokens.push(String::new());
    }
    for word in input.split(is_sep).filter(|w| !w.is_empty()) {
        tokens.push(copy_token(word)?);
    }
    if trailing {
        tokens.push(String::new());
    }
    Ok(tokens)
}

/// Same as [`split`] for callers holding optional arguments.
pub fn split_optional(
    input: Option<&str>,
    separators: Option<&SeparatorSet>,
) -> Result<Vec<String>, SplitError> {
    let input = input.ok_or(SplitError::InvalidArgument("input"))?;
    let separators = separators.ok_or(SplitError::InvalidArgument("separators"))?;
    split(input, separators)
}

fn copy_token(word: &str) -> Result<String, SplitError> {
    let mut token = String::new();
    token.try_reserve_exact(word.len())?;
    token.push_str(word);
    Ok(token)
}
