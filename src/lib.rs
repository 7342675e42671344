//! # `litmatch` — Anchored matching for a literal pattern language
//!
//! Compiles a small pattern language into an ordered sequence of match
//! rules, then tests whether an input string satisfies those rules
//! end-to-end, anchored at both the start and the end.
//!
//! ## Pattern Syntax
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `c` | Match the literal character `c` |
//! | `.` | Match any single character |
//! | `\x` | Match `x` literally, suppressing any special meaning |
//! | `X{n}` | The preceding element matches exactly `n` characters (`n >= 1`) |
//!
//! There is no backtracking, alternation, or capture: every compiled
//! rule consumes a fixed number of characters, so matching is a single
//! linear walk over the input.
//!
//! ## Usage
//!
//! ```
//! use litmatch::matcher::Matcher;
//!
//! let matcher = Matcher::new(r"\.{5}")?;
//! assert!(matcher.is_match("....."));
//! assert!(!matcher.is_match("aaaaa"));
//! # Ok::<(), litmatch::pattern::parser::PatternError>(())
//! ```

pub mod matcher;
pub mod pattern;
