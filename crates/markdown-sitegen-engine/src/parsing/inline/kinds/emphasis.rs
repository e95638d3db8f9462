/// Strong emphasis, rendered as `<b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Emphasis, rendered as `<i>`.
///
/// `*` is a prefix of [`Bold::DELIMITER`], so italic splitting must run after
/// bold splitting has consumed every `**`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";
}
