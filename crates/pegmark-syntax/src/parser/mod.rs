//! # Parser - Backtracking PEG Combinators
//!
//! This module implements a small scannerless PEG engine. There is no lexer:
//! patterns look at the raw text through an immutable [`Input`] cursor.
//!
//! ## Why Data, Not Closures?
//!
//! Patterns are plain values ([`Pattern`]) interpreted by a [`Grammar`]. Rules
//! refer to each other by name, and a name is only looked up when the rule is
//! evaluated. That keeps mutually recursive rules (a bullet containing a list
//! containing bullets) free of forward declarations, and lets the grammar be
//! validated once, up front, by [`GrammarBuilder::build`].
//!
//! ## Match Model
//!
//! Evaluating a pattern yields either
//!
//! - [`Matched`]: the nodes it contributes to its caller plus the new input, or
//! - [`NoMatch`]: the failure sentinel, carrying the input it was given.
//!
//! Failure never consumes anything, so ordered choice simply retries the same
//! `Input` with the next alternative:
//!
//! ```text
//! OneOf(heading, paragraph) on "# Title"
//!   heading   → Matched([heading_1 "Title"], rest = "")
//! OneOf(heading, paragraph) on "Title"
//!   heading   → NoMatch(at = "Title")
//!   paragraph → Matched([paragraph "Title"], rest = "")
//! ```
//!
//! ## Module Structure
//!
//! - [`input`] - The `Input` cursor
//! - [`pattern`] - The `Pattern` enum and its constructor functions
//! - [`engine`] - `Grammar`, `GrammarBuilder` and pattern evaluation
//! - [`indent`] - Dedenting for indentation-sensitive blocks
//! - [`grammar`] - The markdown rule set
//!
//! ## Public API
//!
//! ```
//! use pegmark_syntax::parser::{grammar, parse_string};
//!
//! let tree = parse_string(grammar::markdown(), "Hello *World*").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     r#"['body', ['paragraph', "Hello ", ['emphasis', "World"]]]"#
//! );
//! ```

pub mod engine;
pub mod grammar;
pub mod indent;
pub mod input;
pub mod pattern;

pub use engine::{Grammar, GrammarBuilder, MAX_INDENT_DEPTH, MatchResult, Matched, NoMatch};
pub use input::Input;
pub use pattern::{CharSet, IndentMode, Pattern};

use crate::error::ParseError;
use crate::tree::Node;

/// Parses `text` with the grammar's start rule.
///
/// The whole input has to be consumed; anything left over is reported as
/// [`ParseError::NoMatch`] at the furthest position the grammar reached.
pub fn parse_string(grammar: &Grammar, text: &str) -> Result<Node, ParseError> {
    grammar.parse(text)
}

/// Parses the start of `text` with the named rule, also returning whatever
/// was left unconsumed. Useful for exercising a single rule.
pub fn parse_prefix<'a>(
    grammar: &Grammar,
    rule: &str,
    text: &'a str,
) -> Result<(Node, &'a str), ParseError> {
    grammar.parse_rule(rule, text)
}

/// Parses `text` with the markdown grammar.
///
/// `\r\n` line endings are read as `\n`. Error offsets still point into
/// `text` as given.
pub fn parse(text: &str) -> Result<Node, ParseError> {
    if !text.contains("\r\n") {
        return parse_string(grammar::markdown(), text);
    }
    let unix = text.replace("\r\n", "\n");
    parse_string(grammar::markdown(), &unix).map_err(|err| restore_crlf_offset(err, text))
}

/// Shifts an offset in the LF-only text back onto the CRLF original.
fn restore_crlf_offset(err: ParseError, original: &str) -> ParseError {
    match err {
        ParseError::NoMatch {
            offset,
            line,
            column,
            snippet,
        } => {
            let dropped = original
                .split_inclusive('\n')
                .take(line - 1)
                .filter(|l| l.ends_with("\r\n"))
                .count();
            ParseError::NoMatch {
                offset: offset + dropped,
                line,
                column,
                snippet,
            }
        }
        other => other,
    }
}
