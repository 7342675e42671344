// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/litmatch)

//! State-machine compiler for pattern strings.
//!
//! Compiles patterns like `a{5}.c{2}` into an ordered sequence of
//! `(predicate, repeat count)` rules that the executor applies to
//! candidate strings. The scan is a single left-to-right pass with two
//! states: a normal state that emits one rule per pattern element, and
//! a count-collection state entered at an unescaped `{` that rewrites
//! the repeat count of the most recently emitted rule.

use std::fmt;
use std::str::CharIndices;

/// Accepts or rejects a single input character.
///
/// A closed two-variant set: patterns contain only literal characters
/// and the wildcard, so predicate dispatch is a tag match rather than
/// an arbitrary closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Accepts exactly the given character.
    Literal(char),
    /// Accepts any character. Corresponds to an unescaped `.`.
    Any,
}

impl Predicate {
    /// Evaluates the predicate against one input character.
    #[must_use]
    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Literal(expected) => expected == c,
            Self::Any => true,
        }
    }
}

/// A single compiled rule: the next `repeat` input characters must each
/// satisfy `predicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Predicate applied to each consumed character.
    pub predicate: Predicate,
    /// How many consecutive characters the rule consumes. Always >= 1.
    pub repeat: usize,
}

/// A compiled pattern ready for execution.
///
/// Produced once by [`parse_pattern`] and immutable thereafter; the
/// executor borrows the rule sequence read-only, so a compiled pattern
/// can be reused across any number of match calls.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CompiledPattern {
    /// Ordered rules the input must satisfy.
    pub rules: Vec<Rule>,
}

impl CompiledPattern {
    /// Total number of input characters a successful match consumes.
    ///
    /// Every rule has a fixed length, so this is exact: an input whose
    /// character count differs from this value can never match.
    #[must_use]
    pub fn required_len(&self) -> usize {
        self.rules.iter().map(|rule| rule.repeat).sum()
    }
}

/// Error returned when pattern compilation fails.
///
/// Raised only at compile time; matching itself never fails. No partial
/// [`CompiledPattern`] is produced on error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    /// Structurally malformed pattern: a dangling escape, a repeat
    /// count with nothing before it, or an unterminated `{`.
    Parse {
        /// Human-readable error message.
        message: String,
        /// Byte offset in the pattern where the error occurred.
        position: usize,
    },
    /// A repeat count that is not a positive integer.
    Validation {
        /// Human-readable error message.
        message: String,
        /// Byte offset of the `{` that opened the count.
        position: usize,
    },
}

impl PatternError {
    /// Byte offset in the pattern where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse { position, .. } | Self::Validation { position, .. } => *position,
        }
    }

    /// Human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. } | Self::Validation { message, .. } => message,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern error at position {}: {}",
            self.position(),
            self.message()
        )
    }
}

impl std::error::Error for PatternError {}

/// Compiles a pattern string into a [`CompiledPattern`].
///
/// The empty pattern compiles to an empty rule sequence, which matches
/// exactly the empty string.
///
/// # Errors
///
/// Returns [`PatternError`] if the pattern string is malformed.
///
/// # Examples
///
/// ```
/// use litmatch::pattern::parser::parse_pattern;
///
/// let pattern = parse_pattern("a{5}.c{2}").unwrap();
/// assert_eq!(pattern.rules.len(), 3);
/// assert_eq!(pattern.required_len(), 8);
/// ```
pub fn parse_pattern(input: &str) -> Result<CompiledPattern, PatternError> {
    let parser = Parser::new(input);
    let rules = parser.parse()?;
    Ok(CompiledPattern { rules })
}

/// Scan state. Must be back in `Normal` when the pattern ends.
enum State {
    Normal,
    /// Inside a `{…}` construct. `open` is the byte offset of the `{`;
    /// `buffer` collects the count text, unvalidated until the closing
    /// `}` (so `a{2x}` fails at the `}`, not at the `x`).
    CollectingCount { open: usize, buffer: String },
}

struct Parser<'a> {
    chars: CharIndices<'a>,
    rules: Vec<Rule>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices(),
            rules: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Vec<Rule>, PatternError> {
        let mut state = State::Normal;
        while let Some((pos, mut ch)) = self.chars.next() {
            let mut escaped = false;
            if ch == '\\' {
                match self.chars.next() {
                    Some((_, next)) => {
                        ch = next;
                        escaped = true;
                    }
                    None => {
                        return Err(PatternError::Parse {
                            message: "dangling escape at end of pattern".to_string(),
                            position: pos,
                        });
                    }
                }
            }
            state = match state {
                State::Normal => self.scan_normal(ch, escaped, pos),
                State::CollectingCount { open, buffer } => self.scan_count(ch, open, buffer)?,
            };
        }
        match state {
            State::Normal => Ok(self.rules),
            State::CollectingCount { open, .. } => Err(PatternError::Parse {
                message: "unterminated repeat count".to_string(),
                position: open,
            }),
        }
    }

    /// Handles one character in the normal state, emitting a rule or
    /// entering count collection.
    fn scan_normal(&mut self, ch: char, escaped: bool, pos: usize) -> State {
        if ch == '{' && !escaped {
            return State::CollectingCount {
                open: pos,
                buffer: String::new(),
            };
        }
        let predicate = if ch == '.' && !escaped {
            Predicate::Any
        } else {
            Predicate::Literal(ch)
        };
        self.rules.push(Rule { predicate, repeat: 1 });
        State::Normal
    }

    /// Handles one character while collecting a repeat count. A `}`
    /// closes the count and rewrites the last emitted rule; the count
    /// replaces the rule's previous repeat, it does not multiply it.
    ///
    /// The escape flag is not consulted here: `\}` still closes a
    /// count, since escape decoding has already folded `\x` to `x`
    /// before state dispatch.
    fn scan_count(
        &mut self,
        ch: char,
        open: usize,
        mut buffer: String,
    ) -> Result<State, PatternError> {
        if ch != '}' {
            buffer.push(ch);
            return Ok(State::CollectingCount { open, buffer });
        }
        let repeat = parse_count(&buffer, open)?;
        let Some(rule) = self.rules.pop() else {
            return Err(PatternError::Parse {
                message: "repeat count with no preceding element".to_string(),
                position: open,
            });
        };
        self.rules.push(Rule { repeat, ..rule });
        Ok(State::Normal)
    }
}

/// Parses a collected count buffer into a repeat count >= 1.
fn parse_count(buffer: &str, position: usize) -> Result<usize, PatternError> {
    let Ok(count) = buffer.parse::<usize>() else {
        return Err(PatternError::Validation {
            message: format!("repeat count '{buffer}' is not a number"),
            position,
        });
    };
    if count < 1 {
        return Err(PatternError::Validation {
            message: "repeat count must be >= 1".to_string(),
            position,
        });
    }
    Ok(count)
}
