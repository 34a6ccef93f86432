//! # Engine
//!
//! Interprets [`Pattern`]s against an [`Input`]. Every evaluation returns
//! either a [`Matched`] (the contributed nodes plus the new input) or a
//! [`NoMatch`] holding the very input it was given, so backtracking is just
//! "try the next alternative with the same `Input`".
//!
//! Named rules live in a [`Grammar`]. A rule is either *tagged* (its match is
//! wrapped in an element named after the rule) or *transparent* (its
//! children are spliced into whatever called it).

use std::collections::{HashMap, HashSet};

use crate::error::{GrammarError, ParseError};
use crate::tree::Node;

use super::indent::Dedented;
use super::input::Input;
use super::pattern::{IndentMode, Pattern};

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<'a> {
    /// Nodes contributed to the caller, in order.
    pub items: Vec<Node>,
    /// Input left after the match.
    pub rest: Input<'a>,
}

impl<'a> Matched<'a> {
    fn empty(rest: Input<'a>) -> Self {
        Self { items: vec![], rest }
    }

    fn single(node: Node, rest: Input<'a>) -> Self {
        Self {
            items: vec![node],
            rest,
        }
    }
}

/// The failure sentinel. `at` is always the input the pattern was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch<'a> {
    pub at: Input<'a>,
}

pub type MatchResult<'a> = Result<Matched<'a>, NoMatch<'a>>;

#[derive(Debug, Clone)]
struct RuleDef {
    pattern: Pattern,
    transparent: bool,
}

/// An immutable, validated set of named rules.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: HashMap<&'static str, RuleDef>,
    start: &'static str,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// Name of the top-level rule.
    pub fn start(&self) -> &'static str {
        self.start
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Runs the start rule and requires it to consume the whole text.
    ///
    /// On failure the error points at the furthest position any rule was
    /// tried, which is where the offending character usually sits.
    pub fn parse(&self, text: &str) -> Result<Node, ParseError> {
        let mut session = Session::new(self);
        let (node, rest) = session.run(self.start, text)?;
        if rest.is_empty() {
            log::debug!("parsed {} bytes with `{}`", text.len(), self.start);
            return Ok(node);
        }
        let stopped = text.len() - rest.len();
        let at = Input::new(text).advance(session.furthest.max(stopped));
        Err(no_match_at(at))
    }

    /// Runs any rule against `text`, returning its tree and the unconsumed tail.
    ///
    /// A transparent rule's children are wrapped in an anonymous (`""`) element.
    pub fn parse_rule<'a>(&self, name: &str, text: &'a str) -> Result<(Node, &'a str), ParseError> {
        Session::new(self).run(name, text)
    }

    /// Evaluates a named rule.
    pub fn apply_rule<'a>(&self, name: &'static str, input: Input<'a>) -> MatchResult<'a> {
        Session::new(self).apply_rule(name, input)
    }

    /// Evaluates one pattern.
    pub fn apply<'a>(&self, pattern: &Pattern, input: Input<'a>) -> MatchResult<'a> {
        Session::new(self).apply(pattern, input)
    }
}

/// How many indented blocks may be open inside each other. Deeper blocks
/// simply do not match.
pub const MAX_INDENT_DEPTH: usize = 16;

/// State of one run of a grammar over a text.
struct Session<'g> {
    grammar: &'g Grammar,
    /// Indented blocks currently open.
    depth: usize,
    /// Furthest offset in the top-level text at which a rule failed.
    furthest: usize,
}

impl<'g> Session<'g> {
    fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            depth: 0,
            furthest: 0,
        }
    }

    fn run<'a>(&mut self, name: &str, text: &'a str) -> Result<(Node, &'a str), ParseError> {
        let grammar = self.grammar;
        let (name, def) = grammar
            .rules
            .get_key_value(name)
            .ok_or_else(|| ParseError::UnknownRule(name.to_string()))?;
        let input = Input::new(text);
        let matched = match self.apply_rule(*name, input) {
            Ok(matched) => matched,
            Err(fail) => {
                let at = input.advance(self.furthest.max(fail.at.offset()));
                return Err(no_match_at(at));
            }
        };

        let node = if def.transparent {
            Node::element("", matched.items)
        } else {
            // A tagged rule always contributes exactly its own element.
            matched
                .items
                .into_iter()
                .next()
                .unwrap_or_else(|| Node::element("", vec![]))
        };
        Ok((node, matched.rest.rest()))
    }

    fn apply_rule<'a>(&mut self, name: &'static str, input: Input<'a>) -> MatchResult<'a> {
        let grammar = self.grammar;
        let Some(def) = grammar.rules.get(name) else {
            log::error!("rule `{name}` is not defined");
            return Err(NoMatch { at: input });
        };
        log::trace!("trying `{name}` at offset {}", input.offset());

        let matched = match self.apply(&def.pattern, input) {
            Ok(matched) => matched,
            Err(fail) => {
                if self.depth == 0 {
                    self.furthest = self.furthest.max(input.offset());
                }
                return Err(fail);
            }
        };
        if def.transparent {
            return Ok(matched);
        }
        Ok(Matched::single(
            Node::element(name, matched.items),
            matched.rest,
        ))
    }

    fn apply<'a>(&mut self, pattern: &Pattern, input: Input<'a>) -> MatchResult<'a> {
        let fail = NoMatch { at: input };
        match pattern {
            Pattern::Literal(text) => {
                if input.starts_with(text) {
                    Ok(Matched::single(Node::text(*text), input.advance(text.len())))
                } else {
                    Err(fail)
                }
            }

            Pattern::Words(set) => {
                let rest = input.rest();
                let len = rest
                    .char_indices()
                    .find(|(_, c)| !set.contains(*c))
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                if len == 0 {
                    return Err(fail);
                }
                Ok(Matched::single(Node::text(&rest[..len]), input.advance(len)))
            }

            Pattern::Not(stop) => {
                let rest = input.rest();
                let mut len = rest.len();
                for (i, _) in rest.char_indices() {
                    if self.apply(stop, input.advance(i)).is_ok() {
                        len = i;
                        break;
                    }
                }
                if len == 0 {
                    return Err(fail);
                }
                Ok(Matched::single(Node::text(&rest[..len]), input.advance(len)))
            }

            Pattern::AllOf(patterns) => {
                let mut items = vec![];
                let mut cur = input;
                for p in patterns {
                    let m = self.apply(p, cur).map_err(|_| fail)?;
                    items.extend(m.items);
                    cur = m.rest;
                }
                Ok(Matched { items, rest: cur })
            }

            Pattern::OneOf(patterns) => patterns
                .iter()
                .find_map(|p| self.apply(p, input).ok())
                .ok_or(fail),

            Pattern::Many(p) => {
                let mut items = vec![];
                let mut cur = input;
                while let Ok(m) = self.apply(p, cur) {
                    if m.rest.offset() == cur.offset() {
                        log::warn!(
                            "repetition stopped at offset {}: iteration consumed nothing",
                            cur.offset()
                        );
                        break;
                    }
                    items.extend(m.items);
                    cur = m.rest;
                }
                Ok(Matched { items, rest: cur })
            }

            Pattern::Optional(p) => Ok(self.apply(p, input).unwrap_or(Matched::empty(input))),

            Pattern::Ignore(p) => self.apply(p, input).map(|m| Matched::empty(m.rest)),

            Pattern::Indented {
                pattern,
                units,
                mode,
            } => {
                let matched = self.apply_indented(pattern, units, input);
                match (matched, mode) {
                    (Some(m), _) => Ok(m),
                    (None, IndentMode::Optional) => Ok(Matched::empty(input)),
                    (None, IndentMode::Mandatory) => Err(fail),
                }
            }

            Pattern::Escaped(p) => {
                let m = self.apply(p, input)?;
                let text = concat_text(&m.items);
                let escaped = html_escape::encode_text(&text).into_owned();
                Ok(Matched::single(Node::Text(escaped), m.rest))
            }

            Pattern::Join(p) => {
                let m = self.apply(p, input)?;
                Ok(Matched {
                    items: join_fragments(m.items),
                    rest: m.rest,
                })
            }

            Pattern::Trimmed(p) => {
                let m = self.apply(p, input)?;
                let text = concat_text(&m.items);
                Ok(Matched::single(Node::text(text.trim()), m.rest))
            }

            Pattern::Replace(p, with) => {
                let m = self.apply(p, input)?;
                Ok(Matched::single(Node::text(*with), m.rest))
            }

            Pattern::Ahead(p) => self.apply(p, input).map(|_| Matched::empty(input)),

            Pattern::NotAhead(p) => match self.apply(p, input) {
                Ok(_) => Err(fail),
                Err(_) => Ok(Matched::empty(input)),
            },

            Pattern::End => {
                if input.is_empty() {
                    Ok(Matched::empty(input))
                } else {
                    Err(fail)
                }
            }

            Pattern::Rule(name) => self.apply_rule(*name, input),
        }
    }

    /// Matches `pattern` against the dedented block at `input`.
    fn apply_indented<'a>(
        &mut self,
        pattern: &Pattern,
        units: &[&'static str],
        input: Input<'a>,
    ) -> Option<Matched<'a>> {
        if self.depth >= MAX_INDENT_DEPTH {
            log::debug!(
                "not opening an indented block at offset {}: {MAX_INDENT_DEPTH} already open",
                input.offset()
            );
            return None;
        }
        let block = Dedented::new(input.rest(), units)?;
        self.depth += 1;
        let inner = self.apply(pattern, Input::new(&block.text));
        self.depth -= 1;

        let inner = inner.ok()?;
        let consumed = block.original_len(inner.rest.offset());
        log::trace!(
            "indented block of {} lines ({:?}) consumed {consumed} bytes",
            block.line_count(),
            block.unit
        );
        Some(Matched {
            items: inner.items,
            rest: input.advance(consumed),
        })
    }
}

fn no_match_at(at: Input<'_>) -> ParseError {
    let (line, column) = at.line_col();
    let snippet = at.rest().lines().next().unwrap_or("").to_string();
    ParseError::NoMatch {
        offset: at.offset(),
        line,
        column,
        snippet,
    }
}

fn concat_text(items: &[Node]) -> String {
    items.iter().map(Node::text_content).collect()
}

/// Merges runs of adjacent text fragments; elements stay where they are.
fn join_fragments(items: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = vec![];
    for item in items {
        match (out.last_mut(), item) {
            (Some(Node::Text(acc)), Node::Text(text)) => acc.push_str(&text),
            (_, item) => out.push(item),
        }
    }
    out
}

/// Collects rules, then validates them into a [`Grammar`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    rules: Vec<(&'static str, RuleDef)>,
    start: Option<&'static str>,
}

impl GrammarBuilder {
    /// Registers a rule whose match is wrapped in an element tagged `name`.
    pub fn rule(mut self, name: &'static str, pattern: Pattern) -> Self {
        self.rules.push((
            name,
            RuleDef {
                pattern,
                transparent: false,
            },
        ));
        self
    }

    /// Registers a rule whose children splice into the caller.
    pub fn transparent(mut self, name: &'static str, pattern: Pattern) -> Self {
        self.rules.push((
            name,
            RuleDef {
                pattern,
                transparent: true,
            },
        ));
        self
    }

    pub fn start(mut self, name: &'static str) -> Self {
        self.start = Some(name);
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let start = self.start.ok_or(GrammarError::MissingStart)?;

        let mut seen = HashSet::new();
        for (name, _) in &self.rules {
            if !seen.insert(*name) {
                return Err(GrammarError::DuplicateRule(name.to_string()));
            }
        }
        if !seen.contains(start) {
            return Err(GrammarError::UnknownRule {
                name: start.to_string(),
                referenced_by: "<start>".to_string(),
            });
        }
        for (name, def) in &self.rules {
            if let Some(missing) = def
                .pattern
                .references()
                .into_iter()
                .find(|r| !seen.contains(r))
            {
                return Err(GrammarError::UnknownRule {
                    name: missing.to_string(),
                    referenced_by: name.to_string(),
                });
            }
        }

        Ok(Grammar {
            rules: self.rules.into_iter().collect(),
            start,
        })
    }
}
