/// Fenced code block type.
///
/// A block is fenced code when its first and last lines are both the bare delimiter.
/// Everything between the fences is a raw zone.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `line` is exactly the fence delimiter (surrounding whitespace ignored).
    pub fn is_fence(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }

    /// The verbatim content between the fences of `lines`, or `None` if `lines`
    /// is not a complete fenced block.
    ///
    /// Each content line keeps its indentation and is terminated with `\n`.
    pub fn content(lines: &[&str]) -> Option<String> {
        let (first, rest) = lines.split_first()?;
        let (last, inner) = rest.split_last()?;
        if !Self::is_fence(first) || !Self::is_fence(last) {
            return None;
        }
        let mut content = String::new();
        for line in inner {
            content.push_str(line);
            content.push('\n');
        }
        Some(content)
    }
}
