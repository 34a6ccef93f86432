//! # Patterns
//!
//! A [`Pattern`] is data: a tree of combinators that the engine interprets
//! against an [`Input`](super::input::Input). Rules refer to each other by
//! name through [`Pattern::Rule`], so a grammar can be mutually recursive
//! (a list item containing a list) without any forward declarations.
//!
//! The free functions at the bottom of this module are the vocabulary the
//! grammar modules are written in:
//!
//! ```ignore
//! all_of(vec![ignore(lit("*")), words(CharSet::Except("*")), ignore(lit("*"))])
//! ```

/// The characters a [`Pattern::Words`] run may consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    /// Anything up to the end of the line.
    Line,
    /// Only the listed characters.
    Only(&'static str),
    /// Anything on the line except the listed characters.
    Except(&'static str),
}

impl CharSet {
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharSet::Line => c != '\n',
            CharSet::Only(chars) => chars.contains(c),
            CharSet::Except(chars) => c != '\n' && !chars.contains(c),
        }
    }
}

/// How an [`Pattern::Indented`] block treats missing or unmatched content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    /// At least one indented line must exist and the inner pattern must match.
    Mandatory,
    /// Absent or unmatched indented content succeeds, consuming nothing.
    Optional,
}

/// A parsing expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly this text.
    Literal(&'static str),
    /// A maximal, non-empty run of characters from the set.
    Words(CharSet),
    /// A non-empty run of characters up to where the inner pattern matches.
    Not(Box<Pattern>),
    /// Every pattern, in order.
    AllOf(Vec<Pattern>),
    /// The first pattern that matches.
    OneOf(Vec<Pattern>),
    /// Zero or more repetitions.
    Many(Box<Pattern>),
    /// Zero or one.
    Optional(Box<Pattern>),
    /// Must match; contributes nothing.
    Ignore(Box<Pattern>),
    /// Lines prefixed by one of `units`, stripped before matching `pattern`.
    Indented {
        pattern: Box<Pattern>,
        units: &'static [&'static str],
        mode: IndentMode,
    },
    /// Text of the inner match, HTML-escaped, as one fragment.
    Escaped(Box<Pattern>),
    /// Text fragments of the inner match concatenated.
    Join(Box<Pattern>),
    /// Like `Join`, with surrounding whitespace removed.
    Trimmed(Box<Pattern>),
    /// Must match; contributes the given text instead.
    Replace(Box<Pattern>, &'static str),
    /// Zero-width: the inner pattern matches here.
    Ahead(Box<Pattern>),
    /// Zero-width: the inner pattern does not match here.
    NotAhead(Box<Pattern>),
    /// Zero-width: end of input.
    End,
    /// Reference to a named rule, resolved when evaluated.
    Rule(&'static str),
}

impl Pattern {
    /// Names of all rules this pattern refers to, in order of appearance.
    pub fn references(&self) -> Vec<&'static str> {
        let mut out = vec![];
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<&'static str>) {
        match self {
            Pattern::Rule(name) => out.push(name),
            Pattern::AllOf(ps) | Pattern::OneOf(ps) => {
                for p in ps {
                    p.collect_references(out);
                }
            }
            Pattern::Not(p)
            | Pattern::Many(p)
            | Pattern::Optional(p)
            | Pattern::Ignore(p)
            | Pattern::Escaped(p)
            | Pattern::Join(p)
            | Pattern::Trimmed(p)
            | Pattern::Replace(p, _)
            | Pattern::Ahead(p)
            | Pattern::NotAhead(p)
            | Pattern::Indented { pattern: p, .. } => p.collect_references(out),
            Pattern::Literal(_) | Pattern::Words(_) | Pattern::End => {}
        }
    }
}

pub fn lit(text: &'static str) -> Pattern {
    Pattern::Literal(text)
}

pub fn words(set: CharSet) -> Pattern {
    Pattern::Words(set)
}

pub fn not(stop: Pattern) -> Pattern {
    Pattern::Not(Box::new(stop))
}

pub fn all_of(patterns: Vec<Pattern>) -> Pattern {
    Pattern::AllOf(patterns)
}

pub fn one_of(patterns: Vec<Pattern>) -> Pattern {
    Pattern::OneOf(patterns)
}

pub fn many(pattern: Pattern) -> Pattern {
    Pattern::Many(Box::new(pattern))
}

pub fn optional(pattern: Pattern) -> Pattern {
    Pattern::Optional(Box::new(pattern))
}

pub fn ignore(pattern: Pattern) -> Pattern {
    Pattern::Ignore(Box::new(pattern))
}

pub fn indented(pattern: Pattern, units: &'static [&'static str], mode: IndentMode) -> Pattern {
    Pattern::Indented {
        pattern: Box::new(pattern),
        units,
        mode,
    }
}

pub fn escaped(pattern: Pattern) -> Pattern {
    Pattern::Escaped(Box::new(pattern))
}

pub fn join(pattern: Pattern) -> Pattern {
    Pattern::Join(Box::new(pattern))
}

pub fn trimmed(pattern: Pattern) -> Pattern {
    Pattern::Trimmed(Box::new(pattern))
}

pub fn replace(pattern: Pattern, with: &'static str) -> Pattern {
    Pattern::Replace(Box::new(pattern), with)
}

pub fn ahead(pattern: Pattern) -> Pattern {
    Pattern::Ahead(Box::new(pattern))
}

pub fn not_ahead(pattern: Pattern) -> Pattern {
    Pattern::NotAhead(Box::new(pattern))
}

pub fn end() -> Pattern {
    Pattern::End
}

pub fn rule(name: &'static str) -> Pattern {
    Pattern::Rule(name)
}
