use crate::parsing::ParseError;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, RawBlock},
};

/// Classifies a grouped run of lines into a [`Block`].
///
/// Precedence: heading, quote, unordered list, ordered list, fenced code, paragraph.
/// Heading detection looks at the first line only; the others look at every line.
pub fn classify_block(raw: &RawBlock<'_>) -> Result<Block, ParseError> {
    let lines = raw.lines.as_slice();
    let Some(first) = lines.first() else {
        return Ok(Block::Paragraph {
            text: String::new(),
        });
    };

    if let Some((level, heading)) = Heading::parse(first) {
        let mut parts = vec![heading];
        parts.extend_from_slice(&lines[1..]);
        return Ok(Block::Heading {
            level,
            text: Paragraph::text(&parts),
        });
    }

    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        let content: Vec<&str> = lines.iter().map(|line| BlockQuote::content(line)).collect();
        return Ok(Block::Quote {
            text: Paragraph::text(&content),
        });
    }

    if let Some(items) = unordered_items(lines) {
        return Ok(Block::UnorderedList { items });
    }

    if let Some(items) = ordered_items(lines)? {
        return Ok(Block::OrderedList { items });
    }

    if let Some(text) = CodeFence::content(lines) {
        return Ok(Block::Code { text });
    }

    Ok(Block::Paragraph {
        text: Paragraph::text(lines),
    })
}

fn unordered_items(lines: &[&str]) -> Option<Vec<String>> {
    lines
        .iter()
        .map(|line| UnorderedList::item(line).map(|item| item.trim().to_string()))
        .collect()
}

/// Items of an ordered list, `None` if any line lacks a `N. ` marker.
///
/// A block that is fully numbered but not `1, 2, 3, ...` is an error rather than
/// a paragraph.
fn ordered_items(lines: &[&str]) -> Result<Option<Vec<String>>, ParseError> {
    let Some(numbered) = lines
        .iter()
        .map(|line| OrderedList::item(line))
        .collect::<Option<Vec<_>>>()
    else {
        return Ok(None);
    };

    let mut items = Vec::with_capacity(numbered.len());
    for (expected, (found, item)) in (OrderedList::FIRST_NUMBER..).zip(numbered) {
        if found != expected {
            return Err(ParseError::InvalidListNumbering { expected, found });
        }
        items.push(item.trim().to_string());
    }
    Ok(Some(items))
}
