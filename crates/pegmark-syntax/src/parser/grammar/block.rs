//! Block-level grammar rules.

use crate::parser::engine::GrammarBuilder;
use crate::parser::pattern::*;

use super::spaces;

/// Indentation that opens a code block.
const CODE_UNITS: &[&str] = &["    ", "\t"];
/// Prefix of every blockquote line.
const QUOTE_UNITS: &[&str] = &["> "];

pub(super) fn register(b: GrammarBuilder) -> GrammarBuilder {
    b.rule("heading_1", heading("#"))
        .rule("heading_2", heading("##"))
        .rule("horizontal_rule", horizontal_rule())
        .rule("paragraph", paragraph())
        .transparent("soft_break", soft_break())
        .transparent("block_start", block_start())
        .rule("code_block", code_block())
        .rule("code_line", code_line())
        .rule("blockquote", blockquote())
        .transparent("quote_body", quote_body())
}

/// An ATX heading: `# Title`, optionally closed by more hashes.
fn heading(marker: &'static str) -> Pattern {
    all_of(vec![
        ignore(lit(marker)),
        trimmed(words(CharSet::Except("#"))),
        ignore(optional(words(CharSet::Only("#")))),
        ignore(optional(spaces())),
        ignore(rule("eol")),
    ])
}

/// Three of `-`, `*` or `_`, tight or space-separated, on a line of their own.
fn horizontal_rule() -> Pattern {
    all_of(vec![
        ignore(optional(one_of(vec![lit("   "), lit("  "), lit(" ")]))),
        ignore(one_of(vec![
            lit("---"),
            lit("***"),
            lit("___"),
            lit("- - -"),
            lit("* * *"),
            lit("_ _ _"),
        ])),
        ignore(optional(not(lit("\n")))),
        ignore(rule("eol")),
    ])
}

/// Lines of inline content, joined by single spaces.
fn paragraph() -> Pattern {
    all_of(vec![
        ignore(optional(spaces())),
        rule("span"),
        many(all_of(vec![rule("soft_break"), rule("span")])),
        ignore(rule("eol")),
    ])
}

/// A newline that continues the paragraph, read as a space.
fn soft_break() -> Pattern {
    all_of(vec![
        replace(lit("\n"), " "),
        not_ahead(rule("block_start")),
        ignore(optional(spaces())),
    ])
}

/// Anything that ends a paragraph when it starts the next line.
fn block_start() -> Pattern {
    all_of(vec![
        optional(spaces()),
        one_of(vec![
            lit("\n"),
            end(),
            rule("heading_2"),
            rule("heading_1"),
            rule("horizontal_rule"),
            rule("unordered_marker"),
            rule("ordered_marker"),
            lit("> "),
        ]),
    ])
}

fn code_block() -> Pattern {
    indented(
        all_of(vec![rule("code_line"), many(rule("code_line"))]),
        CODE_UNITS,
        IndentMode::Mandatory,
    )
}

/// One line of code, escaped. A blank line inside the block is kept empty.
fn code_line() -> Pattern {
    one_of(vec![
        all_of(vec![escaped(not(lit("\n"))), ignore(rule("eol"))]),
        escaped(replace(lit("\n"), "")),
    ])
}

fn blockquote() -> Pattern {
    indented(rule("quote_body"), QUOTE_UNITS, IndentMode::Mandatory)
}

/// Quoted lines hold ordinary blocks.
fn quote_body() -> Pattern {
    all_of(vec![
        rule("block"),
        many(one_of(vec![ignore(rule("blank_line")), rule("block")])),
    ])
}
