// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/litmatch)

//! Reusable matcher over the pattern pipeline.
//!
//! [`Matcher`] compiles a pattern string once at construction, then
//! tests any number of candidate strings against the compiled rules.
//! Matching takes `&self` and keeps all cursor state on the stack, so
//! a single matcher can be shared freely across threads.

use crate::pattern::executor::execute_pattern;
use crate::pattern::parser::{parse_pattern, CompiledPattern, PatternError, Rule};

/// A pattern compiled once and reusable across any number of matches.
///
/// # Examples
///
/// ```
/// use litmatch::matcher::Matcher;
///
/// let matcher = Matcher::new(r"a{5}.c{2}").unwrap();
/// assert!(matcher.is_match("aaaaa cc"));
/// assert!(matcher.is_match("aaaaabcc"));
/// assert!(!matcher.is_match("aaaaa cca"));
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Source pattern the rules were compiled from.
    pattern: String,
    /// Compiled rule sequence; immutable after construction.
    compiled: CompiledPattern,
}

impl Matcher {
    /// Compiles a pattern string into a reusable matcher.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern string is malformed.
    /// On error no matcher is produced; there is no partially compiled
    /// state.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: pattern.to_string(),
            compiled: parse_pattern(pattern)?,
        })
    }

    /// Tests whether the pattern matches the entire input string,
    /// anchored at both ends.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        execute_pattern(&self.compiled, text)
    }

    /// Returns the source pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled rule sequence.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.compiled.rules
    }

    /// Number of input characters a successful match consumes.
    #[must_use]
    pub fn required_len(&self) -> usize {
        self.compiled.required_len()
    }
}
