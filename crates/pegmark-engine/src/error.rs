use pegmark_syntax::ParseError;

use crate::html::RenderError;

/// Anything that can go wrong turning markdown into HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
