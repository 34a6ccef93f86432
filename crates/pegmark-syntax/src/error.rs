use thiserror::Error;

/// The top-level rule could not consume the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no pattern matched at line {line}, column {column}: {snippet:?}")]
    NoMatch {
        /// Byte offset of the furthest position the grammar reached.
        offset: usize,
        line: usize,
        column: usize,
        /// The rest of the offending line.
        snippet: String,
    },

    #[error("no rule named `{0}` in grammar")]
    UnknownRule(String),
}

/// A grammar that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("grammar has no start rule")]
    MissingStart,

    #[error("rule `{referenced_by}` refers to undefined rule `{name}`")]
    UnknownRule {
        name: String,
        referenced_by: String,
    },

    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),
}
