//! # pegmark-syntax
//!
//! A backtracking PEG engine and the markdown grammar written in it.
//!
//! ## Architecture Overview
//!
//! The parsing pipeline has a single stage. There is no lexer and no event
//! stream: patterns are matched directly against the text and build the tree
//! as they succeed.
//!
//! ```text
//! Source Text → Grammar (Patterns) → Node tree
//!               (engine)             (tree)
//! ```
//!
//! ### 1. Patterns ([`parser::pattern`])
//!
//! A grammar is a set of named [`Pattern`]s: literals, character runs,
//! sequences, ordered choice, repetition, lookahead, indentation-sensitive
//! blocks and text transforms (escape, join, trim, replace).
//!
//! ### 2. Engine ([`parser::engine`])
//!
//! [`Grammar`] interprets patterns. Failure never consumes input, so ordered
//! choice is plain backtracking. Tagged rules wrap their match in a
//! [`Node::Element`]; transparent rules splice their children into the caller.
//!
//! ### 3. Tree ([`tree`])
//!
//! The output is a [`Node`]: text leaves and tagged elements. Its `Display`
//! is a compact list notation handy in tests:
//!
//! ```text
//! "# Heading 1 #" → ['body', ['heading_1', "Heading 1"]]
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! pegmark-syntax/
//! ├── lib.rs           # This file - public API and snapshot tests
//! ├── error.rs         # ParseError, GrammarError
//! ├── tree.rs          # Node
//! └── parser/
//!     ├── mod.rs       # parse(), parse_string(), parse_prefix()
//!     ├── input.rs     # Input cursor
//!     ├── pattern.rs   # Pattern enum and constructors
//!     ├── engine.rs    # Grammar, GrammarBuilder, evaluation
//!     ├── indent.rs    # Dedenting for indented blocks
//!     └── grammar/
//!         ├── mod.rs   # body, block choice, shared helpers
//!         ├── block.rs # Headings, rules, paragraphs, code, quotes
//!         ├── inline.rs# Emphasis, code spans, links
//!         └── list.rs  # Ordered and unordered lists
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pegmark_syntax::{parse, Node};
//!
//! let tree = parse("# Hello\n").unwrap();
//! assert_eq!(tree.tag(), Some("body"));
//!
//! let heading = tree.find("heading_1").unwrap();
//! assert_eq!(heading.text_content(), "Hello");
//! assert_eq!(heading.children(), &[Node::text("Hello")]);
//! ```
//!
//! Input that no rule accepts is an error, not a best-effort tree:
//!
//! ```
//! let err = pegmark_syntax::parse("a stray ] bracket").unwrap_err();
//! assert!(err.to_string().contains("line 1"));
//! ```

pub mod error;
pub mod parser;
pub mod tree;

pub use error::{GrammarError, ParseError};
pub use parser::{Grammar, GrammarBuilder, Pattern, parse, parse_prefix, parse_string};
pub use tree::Node;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Helper to format a tree for snapshot testing, one node per line.
    fn format_tree(node: &Node, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        match node {
            Node::Text(text) => format!("{prefix}{text:?}\n"),
            Node::Element { tag, children } => {
                let mut result = format!("{prefix}{tag}\n");
                for child in children {
                    result.push_str(&format_tree(child, indent + 1));
                }
                result
            }
        }
    }

    /// Run a snapshot test for a given .md file.
    /// Called by generated test functions (see build.rs).
    fn snapshot_test(name: &str) {
        let snapshot_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("src/snapshots");
        let input = std::fs::read_to_string(snapshot_dir.join(format!("{name}.md"))).unwrap();

        let tree = parse(&input).unwrap();
        let formatted = format_tree(&tree, 0);

        let mut settings = insta::Settings::clone_current();
        settings.set_prepend_module_to_snapshot(false);
        settings.set_snapshot_path(&snapshot_dir);
        settings.bind(|| {
            assert_snapshot!(name, formatted);
        });
    }

    // Generated by build.rs - one test per .md file in src/snapshots/
    include!(concat!(env!("OUT_DIR"), "/snapshot_tests.rs"));

    #[test]
    fn format_tree_nests_by_two_spaces() {
        let tree = parse("Hello *World*").unwrap();
        assert_eq!(
            format_tree(&tree, 0),
            "body\n  paragraph\n    \"Hello \"\n    emphasis\n      \"World\"\n"
        );
    }

    #[test]
    fn reexports_parse_the_same_tree() {
        let input = "## Title\n\n* a\n* b\n";
        assert_eq!(
            parse(input).unwrap(),
            parse_string(parser::grammar::markdown(), input).unwrap()
        );
    }

    #[test]
    fn parse_prefix_leaves_the_tail() {
        let (tree, rest) =
            parse_prefix(parser::grammar::markdown(), "paragraph", "One\n\nTwo").unwrap();
        assert_eq!(tree.to_string(), r#"['paragraph', "One"]"#);
        assert_eq!(rest, "\nTwo");
    }

    #[test]
    fn unknown_rule_is_reported() {
        assert_eq!(
            parse_prefix(parser::grammar::markdown(), "table", "| a |").unwrap_err(),
            ParseError::UnknownRule("table".to_string())
        );
    }
}
