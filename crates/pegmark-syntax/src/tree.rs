//! # Tagged Tree
//!
//! The output of a successful parse. Every node is either a raw text
//! fragment or a tagged element whose tag is the name of the grammar rule
//! that produced it:
//!
//! ```text
//! ['body',
//!  ['paragraph', "Hello ", ['emphasis', "World"]]]
//! ```
//!
//! Trees are built bottom-up by the engine and never mutated afterwards.

use std::fmt;

/// A node of the tagged tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Raw text content with no further structure.
    Text(String),
    /// A tagged node: rule name plus ordered children.
    Element {
        tag: &'static str,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    /// The tag of an element, `None` for text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text(_) => None,
        }
    }

    /// Children of an element; text has none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First child element carrying `tag`.
    pub fn find(&self, tag: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.tag() == Some(tag))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write!(f, "{text:?}"),
            Node::Element { tag, children } => {
                write!(f, "['{tag}'")?;
                for child in children {
                    write!(f, ", {child}")?;
                }
                write!(f, "]")
            }
        }
    }
}
