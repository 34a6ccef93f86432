use html_escape::encode_double_quoted_attribute;
use pegmark_syntax::Node;

use super::{HtmlRegistry, Layout, Placement, RenderError};

/// Walks a tree and produces HTML lines using a registry.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<'r> {
    registry: &'r HtmlRegistry,
    indent: String,
}

impl<'r> HtmlRenderer<'r> {
    pub fn new(registry: &'r HtmlRegistry) -> Self {
        Self {
            registry,
            indent: "  ".to_string(),
        }
    }

    /// Spaces added per nesting level.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Renders a tree to HTML, lines joined with `\n`.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        let lines = self.lines(node)?;
        log::debug!("rendered {} lines", lines.len());
        Ok(lines.join("\n"))
    }

    /// Output lines of a node standing on its own.
    pub fn lines(&self, node: &Node) -> Result<Vec<String>, RenderError> {
        let (tag, children) = match node {
            Node::Text(text) => return Ok(vec![text.clone()]),
            Node::Element { tag, children } => (*tag, children),
        };
        let entry = self.registry.get(tag)?;
        log::trace!("rendering `{tag}` as {:?}", entry.layout);

        let mut lines = match entry.layout {
            Layout::Block => self.block(&entry.element, children)?,
            Layout::Span => self.span(&entry.element, children)?,
            Layout::Void => vec![format!("<{}/>", entry.element)],
            Layout::Tagless => self.children_lines(children)?,
            Layout::Link => vec![self.link(&entry.element, children)?],
        };
        if entry.placement == Placement::Spaced {
            lines.push(String::new());
        }
        Ok(lines)
    }

    fn block(&self, element: &str, children: &[Node]) -> Result<Vec<String>, RenderError> {
        let mut body = self.children_lines(children)?;
        trim_trailing_blank(&mut body);

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(format!("<{element}>"));
        lines.extend(self.indented(body));
        lines.push(format!("</{element}>"));
        Ok(lines)
    }

    /// One line, unless a block child forces the rest onto new lines.
    ///
    /// Inline content after a block child resumes on a fresh line at the
    /// span's own indentation.
    fn span(&self, element: &str, children: &[Node]) -> Result<Vec<String>, RenderError> {
        let mut lines = vec![];
        let mut current = format!("<{element}>");
        for child in children {
            if self.is_inline(child)? {
                if current.is_empty() {
                    trim_trailing_blank(&mut lines);
                }
                current.push_str(&self.inline(child)?);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.extend(self.indented(self.lines(child)?));
            }
        }
        if current.is_empty() {
            trim_trailing_blank(&mut lines);
        }
        current.push_str(&format!("</{element}>"));
        lines.push(current);
        Ok(lines)
    }

    fn link(&self, element: &str, children: &[Node]) -> Result<String, RenderError> {
        let part = |name| children.iter().find(|c| c.tag() == Some(name));
        let text = part("link_text").ok_or(RenderError::MissingLinkPart("link_text"))?;
        let url = part("link_url").ok_or(RenderError::MissingLinkPart("link_url"))?;

        let mut open = format!(
            "<{element} href=\"{}\"",
            encode_double_quoted_attribute(&url.text_content())
        );
        if let Some(title) = part("link_title") {
            open.push_str(&format!(
                " title=\"{}\"",
                encode_double_quoted_attribute(&title.text_content())
            ));
        }
        let text = text
            .children()
            .iter()
            .map(|c| self.inline(c))
            .collect::<Result<String, _>>()?;
        Ok(format!("{open}>{text}</{element}>"))
    }

    /// Merges runs of inline children into single lines.
    fn children_lines(&self, children: &[Node]) -> Result<Vec<String>, RenderError> {
        let mut lines = vec![];
        let mut run: Option<String> = None;
        for child in children {
            if self.is_inline(child)? {
                run.get_or_insert_with(String::new)
                    .push_str(&self.inline(child)?);
            } else {
                lines.extend(run.take());
                lines.extend(self.lines(child)?);
            }
        }
        lines.extend(run);
        Ok(lines)
    }

    fn inline(&self, node: &Node) -> Result<String, RenderError> {
        let (tag, children) = match node {
            Node::Text(text) => return Ok(text.clone()),
            Node::Element { tag, children } => (*tag, children),
        };
        let entry = self.registry.get(tag)?;
        match entry.layout {
            Layout::Link => self.link(&entry.element, children),
            _ => Ok(self.span(&entry.element, children)?.join("\n")),
        }
    }

    /// A span only flows inline if nothing below it is a block.
    fn is_inline(&self, node: &Node) -> Result<bool, RenderError> {
        let (tag, children) = match node {
            Node::Text(_) => return Ok(true),
            Node::Element { tag, children } => (*tag, children),
        };
        let entry = self.registry.get(tag)?;
        if !entry.is_inline() {
            return Ok(false);
        }
        if entry.layout == Layout::Link {
            return Ok(true);
        }
        for child in children {
            if !self.is_inline(child)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Empty lines stay empty.
    fn indented(&self, lines: Vec<String>) -> impl Iterator<Item = String> + '_ {
        lines.into_iter().map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{line}", self.indent)
            }
        })
    }
}

fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{Entry, HtmlRegistry};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> HtmlRegistry {
        HtmlRegistry::markdown()
    }

    fn el(tag: &'static str, children: Vec<Node>) -> Node {
        Node::element(tag, children)
    }

    fn text(t: &str) -> Node {
        Node::text(t)
    }

    #[rstest]
    fn text_renders_as_itself(registry: HtmlRegistry) {
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.render(&text("a < b")).unwrap(), "a < b");
    }

    #[rstest]
    fn heading(registry: HtmlRegistry) {
        let tree = el("body", vec![el("heading_1", vec![text("Heading 1")])]);
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.render(&tree).unwrap(), "<h1>Heading 1</h1>\n");
    }

    #[rstest]
    fn inline_children_share_the_line(registry: HtmlRegistry) {
        let tree = el(
            "paragraph",
            vec![
                text("Hello "),
                el("emphasis", vec![text("World")]),
                text(", see "),
                el("code", vec![text("x")]),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec!["<p>Hello <strong>World</strong>, see <code>x</code></p>", ""]
        );
    }

    #[rstest]
    fn nested_list_indents_per_level(registry: HtmlRegistry) {
        let tree = el(
            "unordered_list",
            vec![
                el(
                    "unordered_bullet",
                    vec![
                        text("item 1"),
                        el(
                            "unordered_list_nested",
                            vec![el("unordered_bullet", vec![text("item 1a")])],
                        ),
                    ],
                ),
                el("unordered_bullet", vec![text("item 2")]),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.render(&tree).unwrap(),
            "<ul>\n  <li>item 1\n    <ul>\n      <li>item 1a</li>\n    </ul>\n  </li>\n  <li>item 2</li>\n</ul>\n"
        );
    }

    #[rstest]
    fn inline_text_resumes_after_a_block_child(registry: HtmlRegistry) {
        let tree = el(
            "unordered_bullet",
            vec![
                text("a"),
                el(
                    "unordered_list_nested",
                    vec![el("unordered_bullet", vec![text("x")])],
                ),
                text("b"),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec!["<li>a", "  <ul>", "    <li>x</li>", "  </ul>", "b</li>"]
        );
    }

    #[rstest]
    fn spaced_block_child_loses_its_blank_line_before_inline_text(registry: HtmlRegistry) {
        let tree = el(
            "ordered_bullet",
            vec![el("paragraph", vec![text("one")]), text("tail")],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.lines(&tree).unwrap(), vec!["<li>", "  <p>one</p>", "tail</li>"]);
    }

    #[rstest]
    fn span_holding_a_block_is_laid_out_as_lines(registry: HtmlRegistry) {
        let tree = el(
            "paragraph",
            vec![
                text("p "),
                el(
                    "emphasis",
                    vec![
                        text("e"),
                        el("blockquote", vec![el("paragraph", vec![text("q")])]),
                        text("f"),
                    ],
                ),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec![
                "<p>p ",
                "  <strong>e",
                "    <blockquote>",
                "      <p>q</p>",
                "    </blockquote>",
                "  f</strong>",
                "</p>",
                "",
            ]
        );
    }

    #[rstest]
    fn link_stays_inline(registry: HtmlRegistry) {
        let tree = el(
            "paragraph",
            vec![
                text("see "),
                el(
                    "link",
                    vec![
                        el("link_text", vec![text("here")]),
                        el("link_url", vec![text("/x")]),
                    ],
                ),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec![r#"<p>see <a href="/x">here</a></p>"#, ""]
        );
    }

    #[rstest]
    fn span_with_only_block_children_closes_on_its_own_line(registry: HtmlRegistry) {
        let tree = el(
            "ordered_bullet",
            vec![
                el("paragraph", vec![text("one")]),
                el("paragraph", vec![text("two")]),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec!["<li>", "  <p>one</p>", "", "  <p>two</p>", "</li>"]
        );
    }

    #[rstest]
    fn block_drops_trailing_blank_line(registry: HtmlRegistry) {
        let tree = el(
            "blockquote",
            vec![
                el("paragraph", vec![text("a")]),
                el("horizontal_rule", vec![]),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.lines(&tree).unwrap(),
            vec!["<blockquote>", "  <p>a</p>", "", "  <hr/>", "</blockquote>", ""]
        );
    }

    #[rstest]
    fn code_block_lines(registry: HtmlRegistry) {
        let tree = el(
            "code_block",
            vec![
                el("code_line", vec![text("&lt;p&gt;html&lt;/p&gt;")]),
                el("code_line", vec![text("")]),
                el("code_line", vec![text("end")]),
            ],
        );
        let r = HtmlRenderer::new(&registry);
        assert_eq!(
            r.render(&tree).unwrap(),
            "<pre>\n  &lt;p&gt;html&lt;/p&gt;\n\n  end\n</pre>\n"
        );
    }

    #[rstest]
    fn void_ignores_children(registry: HtmlRegistry) {
        let tree = el("horizontal_rule", vec![text("ignored")]);
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.lines(&tree).unwrap(), vec!["<hr/>", ""]);
    }

    #[rstest]
    #[case::plain(
        vec![el("link_text", vec![text("a link to Google")]), el("link_url", vec![text("http://www.google.com")])],
        r#"<a href="http://www.google.com">a link to Google</a>"#
    )]
    #[case::titled(
        vec![
            el("link_text", vec![text("home")]),
            el("link_url", vec![text("/?a=1&b=2")]),
            el("link_title", vec![text("The \"Home\" page")]),
        ],
        r#"<a href="/?a=1&amp;b=2" title="The &quot;Home&quot; page">home</a>"#
    )]
    fn links(registry: HtmlRegistry, #[case] children: Vec<Node>, #[case] expected: &str) {
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.render(&el("link", children)).unwrap(), expected);
    }

    #[rstest]
    fn link_without_url_is_an_error(registry: HtmlRegistry) {
        let r = HtmlRenderer::new(&registry);
        let tree = el("link", vec![el("link_text", vec![text("x")])]);
        assert_eq!(
            r.render(&tree).unwrap_err(),
            RenderError::MissingLinkPart("link_url")
        );
    }

    #[rstest]
    fn unknown_tag_is_an_error_not_empty_output(registry: HtmlRegistry) {
        let r = HtmlRenderer::new(&registry);
        let tree = el("body", vec![el("table", vec![text("x")])]);
        assert_eq!(
            r.render(&tree).unwrap_err(),
            RenderError::UnknownTag("table".to_string())
        );
    }

    #[rstest]
    fn custom_indent_and_elements() {
        let registry = HtmlRegistry::markdown()
            .with_element("emphasis", "em")
            .unwrap()
            .register("note", Entry::new("aside", Layout::Block, Placement::Line));
        let r = HtmlRenderer::new(&registry).with_indent(4);
        let tree = el("note", vec![text("a "), el("emphasis", vec![text("b")])]);
        assert_eq!(r.render(&tree).unwrap(), "<aside>\n    a <em>b</em>\n</aside>");
    }

    #[rstest]
    fn rendering_is_repeatable(registry: HtmlRegistry) {
        let tree = el("body", vec![el("paragraph", vec![text("same")])]);
        let r = HtmlRenderer::new(&registry);
        assert_eq!(r.render(&tree).unwrap(), r.render(&tree).unwrap());
    }
}
