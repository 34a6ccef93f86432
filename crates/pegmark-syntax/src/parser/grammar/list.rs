//! # List Grammar
//!
//! Unordered (`*`, `-`, `+`) and ordered (`1.`) lists. A bullet comes in one
//! of two shapes:
//!
//! - **Tight**: inline text, possibly over several lines, then optionally a
//!   nested list indented by a tab or two spaces.
//! - **Loose**: a paragraph followed by blank lines, then either indented
//!   blocks belonging to the bullet or the next bullet of the same list.
//!
//! ```text
//! * item 1            ['unordered_list',
//!   * item 1a           ['unordered_bullet', "item 1",
//! * item 2                ['unordered_list_nested', ['unordered_bullet', "item 1a"]]],
//!                       ['unordered_bullet', "item 2"]]
//! ```
//!
//! A list that is itself indented is dedented first, so nesting is always
//! measured from the list's own margin.

use crate::parser::engine::GrammarBuilder;
use crate::parser::pattern::*;

use super::spaces;

/// Margin a whole list may sit at.
const LIST_MARGIN: &[&str] = &["\t", "    ", "   ", "  ", " "];
/// Indentation that nests content under a bullet.
const NEST_UNITS: &[&str] = &["\t", "  "];

pub(super) fn register(b: GrammarBuilder) -> GrammarBuilder {
    b.transparent(
        "unordered_marker",
        all_of(vec![one_of(vec![lit("*"), lit("-"), lit("+")]), spaces()]),
    )
    .transparent(
        "ordered_marker",
        all_of(vec![words(CharSet::Only("0123456789")), lit("."), spaces()]),
    )
    .rule("unordered_list", list("unordered_items"))
    .rule("unordered_list_nested", list("unordered_items"))
    .transparent("unordered_items", items("unordered_bullet"))
    .rule("unordered_bullet", bullet("unordered_marker", "unordered_loose"))
    .transparent("unordered_loose", loose("unordered_marker"))
    .rule("ordered_list", list("ordered_items"))
    .rule("ordered_list_nested", list("ordered_items"))
    .transparent("ordered_items", items("ordered_bullet"))
    .rule("ordered_bullet", bullet("ordered_marker", "ordered_loose"))
    .transparent("ordered_loose", loose("ordered_marker"))
    .transparent("tight_item", tight_item())
    .transparent("nested_list", nested_list())
    .transparent("item_blocks", item_blocks())
}

fn list(items: &'static str) -> Pattern {
    one_of(vec![
        indented(rule(items), LIST_MARGIN, IndentMode::Mandatory),
        rule(items),
    ])
}

/// Bullets, with blank lines allowed between them.
fn items(bullet: &'static str) -> Pattern {
    all_of(vec![
        rule(bullet),
        many(all_of(vec![ignore(many(rule("blank_line"))), rule(bullet)])),
    ])
}

fn bullet(marker: &'static str, loose: &'static str) -> Pattern {
    all_of(vec![
        ignore(optional(spaces())),
        ignore(rule(marker)),
        one_of(vec![rule(loose), rule("tight_item")]),
    ])
}

fn tight_item() -> Pattern {
    all_of(vec![
        rule("span"),
        many(all_of(vec![rule("soft_break"), rule("span")])),
        ignore(rule("eol")),
        rule("nested_list"),
    ])
}

fn nested_list() -> Pattern {
    indented(
        one_of(vec![
            rule("unordered_list_nested"),
            rule("ordered_list_nested"),
        ]),
        NEST_UNITS,
        IndentMode::Optional,
    )
}

/// A paragraph bullet. It only counts as loose if blank lines follow and
/// something still belongs to the list after them.
fn loose(marker: &'static str) -> Pattern {
    all_of(vec![
        rule("paragraph"),
        ignore(all_of(vec![rule("blank_line"), many(rule("blank_line"))])),
        one_of(vec![
            rule("item_blocks"),
            ahead(all_of(vec![optional(spaces()), rule(marker)])),
        ]),
    ])
}

/// Indented paragraphs and lists that continue a loose bullet.
fn item_blocks() -> Pattern {
    indented(
        many(one_of(vec![
            ignore(rule("blank_line")),
            rule("unordered_list_nested"),
            rule("ordered_list_nested"),
            rule("paragraph"),
        ])),
        NEST_UNITS,
        IndentMode::Mandatory,
    )
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::mixed_markers(
        "- a\n+ b\n* c",
        r#"['body', ['unordered_list', ['unordered_bullet', "a"], ['unordered_bullet', "b"], ['unordered_bullet', "c"]]]"#
    )]
    #[case::ordered(
        "1. one\n2. two\n",
        r#"['body', ['ordered_list', ['ordered_bullet', "one"], ['ordered_bullet', "two"]]]"#
    )]
    #[case::tab_nesting(
        "1. one\n\t* sub\n2. two",
        r#"['body', ['ordered_list', ['ordered_bullet', "one", ['unordered_list_nested', ['unordered_bullet', "sub"]]], ['ordered_bullet', "two"]]]"#
    )]
    #[case::continuation(
        "* a\n  continued\n* b",
        r#"['body', ['unordered_list', ['unordered_bullet', "a", " ", "continued"], ['unordered_bullet', "b"]]]"#
    )]
    #[case::indented_list(
        "  1. An indented numbered bullet",
        r#"['body', ['ordered_list', ['ordered_bullet', "An indented numbered bullet"]]]"#
    )]
    #[case::inline_markup(
        "* *bold* and `code`",
        r#"['body', ['unordered_list', ['unordered_bullet', ['emphasis', "bold"], " and ", ['code', "code"]]]]"#
    )]
    fn lists(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input).unwrap().to_string(), expected);
    }

    #[test]
    fn blank_line_before_sibling_makes_bullet_loose() {
        assert_eq!(
            parse("* a\n\n* b\n").unwrap().to_string(),
            r#"['body', ['unordered_list', ['unordered_bullet', ['paragraph', "a"]], ['unordered_bullet', "b"]]]"#
        );
    }

    #[test]
    fn loose_bullet_owns_indented_paragraphs() {
        assert_eq!(
            parse("* a\n\n  more text\n\n* b").unwrap().to_string(),
            r#"['body', ['unordered_list', ['unordered_bullet', ['paragraph', "a"], ['paragraph', "more text"]], ['unordered_bullet', "b"]]]"#
        );
    }

    #[test]
    fn paragraph_after_blank_line_ends_the_list() {
        assert_eq!(
            parse("* item\n\nPara").unwrap().to_string(),
            r#"['body', ['unordered_list', ['unordered_bullet', "item"]], ['paragraph', "Para"]]"#
        );
    }

    #[test]
    fn deep_nesting() {
        let input = "* a\n  * b\n    * c\n* d\n";
        assert_eq!(
            parse(input).unwrap().to_string(),
            concat!(
                "['body', ['unordered_list', ",
                r#"['unordered_bullet', "a", ['unordered_list_nested', "#,
                r#"['unordered_bullet', "b", ['unordered_list_nested', ['unordered_bullet', "c"]]]]], "#,
                r#"['unordered_bullet', "d"]]]"#
            )
        );
    }
}
