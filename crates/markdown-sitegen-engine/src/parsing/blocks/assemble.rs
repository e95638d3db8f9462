use crate::html::HtmlNode;
use crate::parsing::{
    ParseError,
    inline::{SpanKind, TextSpan, span_to_html_node, spans_to_html_nodes, text_to_spans},
};

use super::{kinds::Heading, types::Block};

/// Builds the container node for one classified block.
///
/// | block          | node                                  |
/// |----------------|---------------------------------------|
/// | Heading        | `h1`..`h6` of inline nodes            |
/// | Paragraph      | `p` of inline nodes                   |
/// | Quote          | `blockquote` of inline nodes          |
/// | UnorderedList  | `ul` of `li`, each of inline nodes    |
/// | OrderedList    | `ol` of `li`, each of inline nodes    |
/// | Code           | `pre` wrapping one `code` leaf        |
pub fn block_to_html_node(block: Block) -> Result<HtmlNode, ParseError> {
    let node = match block {
        Block::Heading { level, text } => inline_container(Heading::tag(level), &text)?,
        Block::Paragraph { text } => inline_container("p", &text)?,
        Block::Quote { text } => inline_container("blockquote", &text)?,
        Block::UnorderedList { items } => list_container("ul", items)?,
        Block::OrderedList { items } => list_container("ol", items)?,
        Block::Code { text } => {
            let code = span_to_html_node(TextSpan::new(text, SpanKind::Code))?;
            HtmlNode::container(Some("pre"), vec![code], vec![])?
        }
    };
    Ok(node)
}

fn inline_container(tag: &str, text: &str) -> Result<HtmlNode, ParseError> {
    let children = spans_to_html_nodes(text_to_spans(text)?)?;
    Ok(HtmlNode::container(Some(tag), children, vec![])?)
}

fn list_container(tag: &str, items: Vec<String>) -> Result<HtmlNode, ParseError> {
    let children = items
        .iter()
        .map(|item| inline_container("li", item))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::container(Some(tag), children, vec![])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(block: Block) -> String {
        block_to_html_node(block).unwrap().render()
    }

    #[rstest]
    #[case(1, "<h1>Title</h1>")]
    #[case(4, "<h4>Title</h4>")]
    #[case(6, "<h6>Title</h6>")]
    fn heading_levels(#[case] level: u8, #[case] expected: &str) {
        assert_eq!(
            render(Block::Heading {
                level,
                text: "Title".to_string()
            }),
            expected
        );
    }

    #[test]
    fn paragraph_with_inline_markup() {
        assert_eq!(
            render(Block::Paragraph {
                text: "This is **bolded** paragraph with `code`".to_string()
            }),
            "<p>This is <b>bolded</b> paragraph with <code>code</code></p>"
        );
    }

    #[test]
    fn quote_is_inline_parsed() {
        assert_eq!(
            render(Block::Quote {
                text: "a *quoted* line".to_string()
            }),
            "<blockquote>a <i>quoted</i> line</blockquote>"
        );
    }

    #[test]
    fn list_items_are_inline_parsed() {
        assert_eq!(
            render(Block::UnorderedList {
                items: vec!["plain".to_string(), "[link](/x)".to_string()]
            }),
            r#"<ul><li>plain</li><li><a href="/x">link</a></li></ul>"#
        );
        assert_eq!(
            render(Block::OrderedList {
                items: vec!["first".to_string(), "**second**".to_string()]
            }),
            "<ol><li>first</li><li><b>second</b></li></ol>"
        );
    }

    #[test]
    fn empty_list_item_still_has_a_child() {
        assert_eq!(
            render(Block::UnorderedList {
                items: vec![String::new()]
            }),
            "<ul><li></li></ul>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        assert_eq!(
            render(Block::Code {
                text: "let x = *y;\n".to_string()
            }),
            "<pre><code>let x = *y;\n</code></pre>"
        );
    }

    #[test]
    fn inline_errors_propagate() {
        assert!(matches!(
            block_to_html_node(Block::Paragraph {
                text: "oops `unclosed".to_string()
            }),
            Err(ParseError::UnmatchedDelimiter { .. })
        ));
    }
}
