//! # pegmark-engine
//!
//! Markdown in, HTML out. Parsing is done by [`pegmark_syntax`]; this crate
//! renders the resulting tree through an [`HtmlRegistry`].
//!
//! ```
//! let html = pegmark_engine::to_html("Hello *World*").unwrap();
//! assert_eq!(html, "<p>Hello <strong>World</strong></p>\n");
//! ```
//!
//! Parsing either consumes the whole document or fails; there is no partial
//! output:
//!
//! ```
//! assert!(pegmark_engine::to_html("a stray ]").is_err());
//! ```

pub mod error;
pub mod html;

pub use error::Error;
pub use html::{Entry, HtmlRegistry, HtmlRenderer, Layout, Placement, RenderError};
pub use pegmark_config::Config;
pub use pegmark_syntax::Node;

/// A parser and renderer pair with fixed settings.
#[derive(Debug, Clone)]
pub struct Markdown {
    registry: HtmlRegistry,
    indent: usize,
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Markdown {
    /// The markdown registry with two-space indentation.
    pub fn new() -> Self {
        Self {
            registry: HtmlRegistry::markdown(),
            indent: 2,
        }
    }

    /// Applies the indentation and element overrides from `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut registry = HtmlRegistry::markdown();
        for (tag, element) in &config.elements {
            registry = registry.with_element(tag, element)?;
        }
        Ok(Self {
            registry,
            indent: config.indent,
        })
    }

    pub fn registry(&self) -> &HtmlRegistry {
        &self.registry
    }

    pub fn parse(&self, text: &str) -> Result<Node, Error> {
        Ok(pegmark_syntax::parse(text)?)
    }

    pub fn render(&self, tree: &Node) -> Result<String, Error> {
        let renderer = HtmlRenderer::new(&self.registry).with_indent(self.indent);
        Ok(renderer.render(tree)?)
    }

    pub fn to_html(&self, text: &str) -> Result<String, Error> {
        let tree = self.parse(text)?;
        self.render(&tree)
    }
}

/// Parses markdown into a tree.
pub fn parse(text: &str) -> Result<Node, Error> {
    Markdown::new().parse(text)
}

/// Renders a tree, freshly parsed or built by hand.
pub fn render(tree: &Node) -> Result<String, Error> {
    Markdown::new().render(tree)
}

pub fn to_html(text: &str) -> Result<String, Error> {
    Markdown::new().to_html(text)
}
