use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Element attributes, rendered in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in the generated HTML tree.
///
/// Leaves hold a single value (raw text when untagged); parents own an
/// ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf rendered as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Add an attribute, keeping earlier attributes first.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children.as_slice(),
        }
    }

    /// Serialize the tree to an HTML string.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        write_node(self, &mut out)?;
        Ok(out)
    }

    /// Concatenated text of all leaves, with markup removed.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            let value = value.as_deref().ok_or(Error::MissingValue)?;
            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, attrs, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            let tag = tag.as_deref().ok_or(Error::MissingTag)?;
            if children.is_empty() {
                return Err(Error::EmptyChildren {
                    tag: tag.to_string(),
                });
            }
            open_tag(tag, attrs, out);
            for child in children {
                write_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    // Unquoted ` key=value` pairs; downstream consumers rely on this exact form.
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn collect_text(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Leaf { value, .. } => {
            if let Some(value) = value {
                out.push_str(value);
            }
        }
        HtmlNode::Parent { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
