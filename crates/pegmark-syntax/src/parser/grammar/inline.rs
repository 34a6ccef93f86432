//! # Inline-Level Grammar
//!
//! Inline elements are the formatting within a line: emphasis, code spans and
//! links. Each one starts with a special character, and [`plain`] text is
//! everything that is not one of those characters:
//!
//! | Character | Element |
//! |-----------|---------|
//! | `*` | `emphasis` |
//! | `` ` `` | `code` |
//! | `[` | `link` |
//! | (other) | plain text |
//!
//! ## Strictness
//!
//! An opener without its closer is not text. `3 * 4` does not parse, because
//! `*` is neither plain nor the start of an emphasis. Emphasis does not nest,
//! and code span contents are HTML-escaped at parse time.

use crate::parser::engine::GrammarBuilder;
use crate::parser::pattern::*;

use super::spaces;

/// Characters that can only appear as part of an inline construct.
const SPECIAL: &str = "*`[]";

pub(super) fn register(b: GrammarBuilder) -> GrammarBuilder {
    b.transparent("span", span())
        .transparent("inline", inline())
        .transparent("plain", plain())
        .rule("emphasis", emphasis())
        .rule("code", code())
        .rule("link", link())
        .rule("link_text", link_text())
        .rule("link_url", link_url())
        .rule("link_title", link_title())
}

/// One or more inline elements.
fn span() -> Pattern {
    all_of(vec![rule("inline"), many(rule("inline"))])
}

fn inline() -> Pattern {
    one_of(vec![rule("code"), rule("link"), rule("emphasis"), rule("plain")])
}

fn plain() -> Pattern {
    words(CharSet::Except(SPECIAL))
}

/// `*text*` on a single line.
fn emphasis() -> Pattern {
    all_of(vec![
        ignore(lit("*")),
        words(CharSet::Except("*")),
        ignore(lit("*")),
    ])
}

/// `` `text` `` on a single line.
fn code() -> Pattern {
    all_of(vec![
        ignore(lit("`")),
        escaped(not(one_of(vec![lit("`"), lit("\n")]))),
        ignore(lit("`")),
    ])
}

/// `[text](url)` or `[text](url "title")`.
fn link() -> Pattern {
    all_of(vec![
        rule("link_text"),
        ignore(lit("(")),
        rule("link_url"),
        optional(rule("link_title")),
        ignore(optional(spaces())),
        ignore(lit(")")),
    ])
}

fn link_text() -> Pattern {
    all_of(vec![
        ignore(lit("[")),
        words(CharSet::Except("]")),
        ignore(lit("]")),
    ])
}

fn link_url() -> Pattern {
    not(one_of(vec![lit(")"), lit(" "), lit("\t"), lit("\n")]))
}

fn link_title() -> Pattern {
    all_of(vec![
        ignore(spaces()),
        ignore(lit("\"")),
        words(CharSet::Except("\"")),
        ignore(lit("\"")),
    ])
}
