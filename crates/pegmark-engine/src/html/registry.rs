//! Tag → HTML dispatch table.

use std::collections::HashMap;

use super::RenderError;

/// How a tagged node is turned into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Open tag, indented children, close tag, each on its own line.
    Block,
    /// Open tag, children and close tag on one line.
    Span,
    /// A single self-closing tag; children are ignored.
    Void,
    /// Children only, with no tag and no extra indentation.
    Tagless,
    /// An anchor built from `link_text`, `link_url` and `link_title` children.
    Link,
}

/// Where a rendered node sits relative to its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Flows into the parent's current line. Only spans and links use it.
    Inline,
    /// On its own line.
    Line,
    /// On its own line, followed by a blank line.
    Spaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Element name, empty for tagless entries.
    pub element: String,
    pub layout: Layout,
    pub placement: Placement,
}

impl Entry {
    pub fn new(element: &str, layout: Layout, placement: Placement) -> Self {
        Self {
            element: element.to_string(),
            layout,
            placement,
        }
    }

    /// Whether the node renders into its parent's running line.
    pub fn is_inline(&self) -> bool {
        self.placement == Placement::Inline && matches!(self.layout, Layout::Span | Layout::Link)
    }
}

/// Maps grammar tags to how they render. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRegistry {
    entries: HashMap<String, Entry>,
}

impl HtmlRegistry {
    /// An empty registry; every tag must be registered before rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for the markdown grammar.
    pub fn markdown() -> Self {
        use Layout::*;
        use Placement::*;

        Self::new()
            .register("body", Entry::new("", Tagless, Line))
            .register("heading_1", Entry::new("h1", Span, Spaced))
            .register("heading_2", Entry::new("h2", Span, Spaced))
            .register("paragraph", Entry::new("p", Span, Spaced))
            .register("emphasis", Entry::new("strong", Span, Inline))
            .register("code", Entry::new("code", Span, Inline))
            .register("link", Entry::new("a", Link, Inline))
            .register("unordered_list", Entry::new("ul", Block, Spaced))
            .register("ordered_list", Entry::new("ol", Block, Spaced))
            .register("unordered_list_nested", Entry::new("ul", Block, Line))
            .register("ordered_list_nested", Entry::new("ol", Block, Line))
            .register("unordered_bullet", Entry::new("li", Span, Line))
            .register("ordered_bullet", Entry::new("li", Span, Line))
            .register("horizontal_rule", Entry::new("hr", Void, Spaced))
            .register("code_block", Entry::new("pre", Block, Spaced))
            .register("code_line", Entry::new("", Tagless, Line))
            .register("blockquote", Entry::new("blockquote", Block, Spaced))
    }

    /// Adds or replaces the entry for `tag`.
    pub fn register(mut self, tag: &str, entry: Entry) -> Self {
        self.entries.insert(tag.to_string(), entry);
        self
    }

    /// Renames the element an already registered tag renders as.
    pub fn with_element(mut self, tag: &str, element: &str) -> Result<Self, RenderError> {
        let entry = self
            .entries
            .get_mut(tag)
            .ok_or_else(|| RenderError::UnknownTag(tag.to_string()))?;
        log::debug!("rendering `{tag}` as <{element}> instead of <{}>", entry.element);
        entry.element = element.to_string();
        Ok(self)
    }

    pub fn get(&self, tag: &str) -> Result<&Entry, RenderError> {
        self.entries
            .get(tag)
            .ok_or_else(|| RenderError::UnknownTag(tag.to_string()))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
