use super::{classify::LineClass, types::RawBlock};

/// Groups classified lines into [`RawBlock`]s.
///
/// One or more blank lines end a block; every other line joins the open block.
/// Fences get no special treatment here, `classify_block` decides what a block is.
pub struct BlockBuilder<'a> {
    lines: Vec<&'a str>,
    out: Vec<RawBlock<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            lines: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if c.is_blank {
            self.flush();
        } else {
            self.lines.push(c.text);
        }
    }

    pub fn finish(mut self) -> Vec<RawBlock<'a>> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if !self.lines.is_empty() {
            self.out.push(RawBlock {
                lines: std::mem::take(&mut self.lines),
            });
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
