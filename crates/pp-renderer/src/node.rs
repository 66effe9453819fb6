//! Component tree and serialization.

/// Tags written with a trailing newline, to keep the output readable.
const BLOCK_TAGS: &[&str] = &[
    "html", "head", "body", "meta", "title", "style", "nav", "section", "footer", "div", "form",
    "h1", "h2", "h3", "p", "label", "input", "textarea",
];

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["meta", "input", "link"];

/// A node in the component tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An HTML element.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Trusted markup written verbatim. Only used for the fixed stylesheet.
    Raw(String),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub(crate) fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Serialize the tree to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.write_to(&mut out);
        out
    }

    /// Serialize the tree depth-first into `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_to(out),
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(markup) => out.push_str(markup),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_to(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Serialize this element and its subtree.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if !VOID_TAGS.contains(&self.tag) {
            for child in &self.children {
                child.write_to(out);
            }
            out.push_str("</");
            out.push_str(self.tag);
            out.push('>');
        }

        if BLOCK_TAGS.contains(&self.tag) {
            out.push('\n');
        }
    }
}

/// Escape HTML special characters in text and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
