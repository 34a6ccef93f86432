//! # HTML Rendering
//!
//! Turns a parsed [`Node`](pegmark_syntax::Node) tree into HTML text. Every
//! tag is looked up in an [`HtmlRegistry`], whose [`Entry`] says which element
//! to emit, how to lay it out ([`Layout`]) and where it sits among its
//! siblings ([`Placement`]).
//!
//! ```text
//! ['body', ['paragraph', "Hello ", ['emphasis', "World"]]]
//!
//! body       Tagless  → children only
//! paragraph  Span     → <p>Hello <strong>World</strong></p>
//! emphasis   Span     → inline, joins the paragraph's line
//! ```
//!
//! Output is built as lines, indented two spaces per block level, and joined
//! with `\n` at the very end.

mod registry;
mod renderer;

pub use registry::{Entry, HtmlRegistry, Layout, Placement};
pub use renderer::HtmlRenderer;

/// A tree the registry cannot render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no renderer registered for tag `{0}`")]
    UnknownTag(String),
    #[error("link has no `{0}` child")]
    MissingLinkPart(&'static str),
}
