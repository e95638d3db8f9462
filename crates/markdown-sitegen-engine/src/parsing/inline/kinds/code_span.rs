/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are split out first, so no other inline
/// construct is ever recognized inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
}
