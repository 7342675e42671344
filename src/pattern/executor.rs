//! Anchored executor for compiled patterns.
//!
//! Walks the rule sequence in order, consuming exactly `repeat` input
//! characters per rule and applying the rule's predicate to each one.
//! Matching is anchored at both ends: the first rule starts at the
//! first character, and a match succeeds only if the final rule
//! consumes the last character. Every rule has a fixed length, so
//! there is no backtracking — a rejected character or exhausted input
//! fails the match immediately.

use crate::pattern::parser::CompiledPattern;

/// Executes a compiled pattern against an input string.
///
/// Returns `true` iff the rule sequence consumes the entire input
/// exactly: every consumed character satisfies its rule's predicate
/// and no characters remain once the last rule has run. An input
/// shorter or longer than the pattern requires always fails, even if
/// a prefix matched perfectly.
///
/// Never fails for a well-formed [`CompiledPattern`]; all rejection is
/// encoded as `false`. Runs in O(input length + rule count) with no
/// allocation, and takes the pattern by shared reference, so a single
/// compiled pattern can serve concurrent calls.
pub fn execute_pattern(pattern: &CompiledPattern, text: &str) -> bool {
    let mut chars = text.chars();
    for rule in &pattern.rules {
        for _ in 0..rule.repeat {
            match chars.next() {
                Some(c) if rule.predicate.accepts(c) => {}
                _ => return false,
            }
        }
    }
    // Anchored at the end: nothing may remain unconsumed.
    chars.next().is_none()
}
