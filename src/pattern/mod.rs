// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/litmatch)

//! Pattern compilation and anchored execution.
//!
//! A pattern string is compiled once into an ordered sequence of
//! `(predicate, repeat count)` rules, which the executor then applies
//! to candidate strings rule by rule, consuming a fixed number of
//! characters per rule.
//!
//! # Pattern Syntax
//!
//! ```text
//! c     — Match the literal character `c`
//! .     — Match any single character
//! \x    — Escape: match `x` literally (`\.`, `\{`, `\\`)
//! X{n}  — Set the repeat count of the preceding element to `n` (n >= 1)
//! ```
//!
//! A repeat count *replaces* the count of the element before it rather
//! than combining with it, so `a{2}{3}` matches exactly three `a`s.

pub mod executor;
pub mod parser;
