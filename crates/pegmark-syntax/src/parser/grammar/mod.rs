//! # Grammar Rules
//!
//! The markdown grammar, written as named [`Pattern`]s registered on a
//! [`GrammarBuilder`](crate::parser::GrammarBuilder). Each submodule registers
//! one family of rules:
//!
//! - [`block`] - Headings, rules, paragraphs, code blocks, blockquotes
//! - [`inline`] - Plain text, emphasis, code spans, links
//! - [`list`] - Ordered and unordered lists, with nesting
//!
//! ## Priority
//!
//! `body` repeats an ordered choice over the block rules. Order is part of the
//! grammar: anything that could also be read as paragraph text (a heading, a
//! rule, a bullet, an indented code line) has to be tried before `paragraph`.
//!
//! ## Rule Tags
//!
//! | Rule | Tag | Transparent? |
//! |------|-----|--------------|
//! | `body` | `body` | no |
//! | `heading_1`, `heading_2` | same | no |
//! | `horizontal_rule` | same | no |
//! | `paragraph` | same | no |
//! | `emphasis`, `code`, `link`, `link_text`, `link_url`, `link_title` | same | no |
//! | `unordered_list`, `ordered_list` (+ `_nested`) | same | no |
//! | `unordered_bullet`, `ordered_bullet` | same | no |
//! | `code_block`, `code_line`, `blockquote` | same | no |
//! | `block`, `span`, `plain`, `blank_line`, `eol`, ... | - | yes |
//!
//! ## No Catch-All
//!
//! There is no rule that swallows arbitrary characters. A stray
//! `]`, `[`, `*` or `` ` `` that does not form a construct leaves input
//! unconsumed, and [`Grammar::parse`] reports it.

mod block;
mod inline;
mod list;

use std::sync::LazyLock;

use crate::error::GrammarError;
use crate::parser::engine::Grammar;
use crate::parser::pattern::*;

static MARKDOWN: LazyLock<Grammar> =
    LazyLock::new(|| build().expect("the built-in markdown grammar is well-formed"));

/// The shared markdown grammar, built on first use.
pub fn markdown() -> &'static Grammar {
    &MARKDOWN
}

/// Builds a fresh copy of the markdown grammar.
pub fn build() -> Result<Grammar, GrammarError> {
    let b = Grammar::builder()
        .rule("body", body())
        .transparent("block", block_choice())
        .transparent("blank_line", blank_line())
        .transparent("eol", one_of(vec![lit("\n"), end()]));
    let b = block::register(b);
    let b = inline::register(b);
    let b = list::register(b);
    b.start("body").build()
}

/// The document: blank lines and blocks, in any number.
fn body() -> Pattern {
    many(one_of(vec![ignore(rule("blank_line")), rule("block")]))
}

/// Every block-level rule, most specific first.
fn block_choice() -> Pattern {
    one_of(vec![
        rule("heading_2"),
        rule("heading_1"),
        rule("horizontal_rule"),
        rule("unordered_list"),
        rule("ordered_list"),
        rule("code_block"),
        rule("blockquote"),
        rule("paragraph"),
    ])
}

/// A whitespace-only line, or trailing whitespace at the end of input.
fn blank_line() -> Pattern {
    one_of(vec![
        all_of(vec![optional(spaces()), lit("\n")]),
        all_of(vec![spaces(), end()]),
    ])
}

/// One or more spaces or tabs.
pub(crate) fn spaces() -> Pattern {
    words(CharSet::Only(" \t"))
}
