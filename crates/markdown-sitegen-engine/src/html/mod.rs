//! # HTML Node Tree
//!
//! The generic markup tree produced by the block parser and serialized by [`HtmlNode::render`].
//!
//! A node is exactly one of:
//! - **`Leaf`**: a value with an optional tag. Without a tag it renders as raw text.
//! - **`Container`**: a tag wrapping one or more child nodes. Owns its children.
//!
//! Both constructors validate their inputs, so every `HtmlNode` in existence satisfies
//! the leaf/container invariants and rendering cannot fail.

use thiserror::Error;

/// Attribute name/value pairs, rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("Leaf node requires a value")]
    MissingValue,
    #[error("Container node <{tag}> requires at least one child")]
    EmptyChildren { tag: String },
    #[error("Container node requires a non-empty tag")]
    InvalidTag,
}

/// A node with a literal value and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl Leaf {
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

/// A tagged node wrapping at least one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl Container {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(Leaf),
    Container(Container),
}

impl HtmlNode {
    /// Builds a leaf node. `tag: None` makes a bare text node.
    pub fn leaf(
        tag: Option<&str>,
        value: Option<String>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let value = value.ok_or(NodeError::MissingValue)?;
        Ok(HtmlNode::Leaf(Leaf {
            tag: tag.map(str::to_string),
            value,
            attributes,
        }))
    }

    /// Builds a container node. Both the tag and at least one child are required.
    pub fn container(
        tag: Option<&str>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(NodeError::InvalidTag),
        };
        if children.is_empty() {
            return Err(NodeError::EmptyChildren {
                tag: tag.to_string(),
            });
        }
        Ok(HtmlNode::Container(Container {
            tag: tag.to_string(),
            children,
            attributes,
        }))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Container(container) => Some(container.tag()),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Container(container) => container.attributes(),
        }
    }

    /// Attributes as `name="value"` pairs joined by spaces, e.g. `href="/" target="_blank"`.
    pub fn attributes_to_html(&self) -> String {
        self.attributes()
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serializes this node and all of its descendants.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(Leaf {
                tag: None, value, ..
            }) => out.push_str(value),
            HtmlNode::Leaf(Leaf {
                tag: Some(tag),
                value,
                ..
            }) => {
                self.open_tag(out, tag);
                out.push_str(value);
                close_tag(out, tag);
            }
            HtmlNode::Container(Container { tag, children, .. }) => {
                self.open_tag(out, tag);
                for child in children {
                    child.render_into(out);
                }
                close_tag(out, tag);
            }
        }
    }

    fn open_tag(&self, out: &mut String, tag: &str) {
        out.push('<');
        out.push_str(tag);
        if !self.attributes().is_empty() {
            out.push(' ');
            out.push_str(&self.attributes_to_html());
        }
        out.push('>');
    }
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn text(value: &str) -> HtmlNode {
        HtmlNode::leaf(None, Some(value.to_string()), vec![]).unwrap()
    }

    #[test]
    fn attributes_to_html_joins_pairs() {
        let node = HtmlNode::leaf(
            Some("a"),
            Some("Google".to_string()),
            attrs(&[("href", "https://www.google.com"), ("target", "_blank")]),
        )
        .unwrap();
        assert_eq!(
            node.attributes_to_html(),
            r#"href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn attributes_to_html_empty_without_attributes() {
        let node = HtmlNode::leaf(Some("p"), Some("Hello, world!".to_string()), vec![]).unwrap();
        assert_eq!(node.attributes_to_html(), "");
    }

    #[test]
    fn render_opens_with_attributes_to_html() {
        let node = HtmlNode::container(
            Some("div"),
            vec![text("x")],
            attrs(&[("id", "main"), ("class", "wide")]),
        )
        .unwrap();
        assert_eq!(
            node.render(),
            format!("<div {}>x</div>", node.attributes_to_html())
        );
    }

    #[test]
    fn leaf_without_tag_renders_raw_value() {
        assert_eq!(text("Just text").render(), "Just text");
    }

    #[test]
    fn leaf_with_tag_and_attributes() {
        let node = HtmlNode::leaf(
            Some("a"),
            Some("Click me!".to_string()),
            attrs(&[("href", "https://www.google.com")]),
        )
        .unwrap();
        assert_eq!(
            node.render(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn leaf_with_empty_value_still_wraps() {
        let node = HtmlNode::leaf(
            Some("img"),
            Some(String::new()),
            attrs(&[("src", "cat.png"), ("alt", "a cat")]),
        )
        .unwrap();
        assert_eq!(node.render(), r#"<img src="cat.png" alt="a cat"></img>"#);
    }

    #[test]
    fn leaf_without_value_is_rejected() {
        assert_eq!(
            HtmlNode::leaf(Some("p"), None, vec![]),
            Err(NodeError::MissingValue)
        );
    }

    #[test]
    fn container_renders_children_in_order() {
        let node = HtmlNode::container(
            Some("p"),
            vec![
                HtmlNode::leaf(Some("b"), Some("Bold text".to_string()), vec![]).unwrap(),
                text("Normal text"),
                HtmlNode::leaf(Some("i"), Some("italic text".to_string()), vec![]).unwrap(),
                text("Normal text"),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(
            node.render(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn nested_containers_render_recursively() {
        let inner = HtmlNode::container(Some("li"), vec![text("item")], vec![]).unwrap();
        let list = HtmlNode::container(Some("ul"), vec![inner], attrs(&[("class", "x")])).unwrap();
        let root = HtmlNode::container(Some("div"), vec![list], vec![]).unwrap();
        assert_eq!(
            root.render(),
            r#"<div><ul class="x"><li>item</li></ul></div>"#
        );
    }

    #[test]
    fn render_is_repeatable() {
        let node = HtmlNode::container(Some("p"), vec![text("again")], vec![]).unwrap();
        assert_eq!(node.render(), node.render());
    }

    #[test]
    fn container_without_children_is_rejected() {
        assert_eq!(
            HtmlNode::container(Some("div"), vec![], vec![]),
            Err(NodeError::EmptyChildren {
                tag: "div".to_string()
            })
        );
    }

    #[test]
    fn container_without_tag_is_rejected() {
        assert_eq!(
            HtmlNode::container(None, vec![text("x")], vec![]),
            Err(NodeError::InvalidTag)
        );
        assert_eq!(
            HtmlNode::container(Some(""), vec![text("x")], vec![]),
            Err(NodeError::InvalidTag)
        );
    }

    #[test]
    fn accessors_expose_structure() {
        let node = HtmlNode::container(Some("p"), vec![text("x")], vec![]).unwrap();
        assert_eq!(node.tag(), Some("p"));
        match node {
            HtmlNode::Container(container) => {
                assert_eq!(container.children().len(), 1);
                assert_eq!(container.children()[0].tag(), None);
            }
            HtmlNode::Leaf(_) => panic!("expected container"),
        }
    }
}
