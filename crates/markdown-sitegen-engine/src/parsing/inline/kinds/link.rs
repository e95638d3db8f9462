/// Link syntax: `[text](url)`.
///
/// Neither part may contain its own bracket characters, so `[a [b]](c)` is not a link.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Image syntax: a [`Link`] prefixed with `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
}
