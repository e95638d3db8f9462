/// A cursor for byte-by-byte inline scanning.
///
/// Only ever stops on ASCII delimiter bytes, so every index it reports is a
/// valid `char` boundary for slicing `s`.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead without advancing.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until the current byte is one of `stops` or input ends.
    pub fn bump_until(&mut self, stops: &[u8]) {
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.i += 1;
        }
    }

    /// Slices the underlying string between two positions taken from this cursor.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.peek_at(1), Some(b'l'));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn bump_until_stops_on_any_stop_byte() {
        let mut cur = Cursor::new("alt text](url)");
        cur.bump_until(b"[]");
        assert_eq!(cur.peek(), Some(b']'));
        assert_eq!(cur.slice(0, cur.pos()), "alt text");
    }

    #[test]
    fn bump_until_runs_to_eof_without_stop() {
        let mut cur = Cursor::new("no closer");
        cur.bump_until(b")");
        assert!(cur.eof());
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let mut cur = Cursor::new("héllo]");
        cur.bump_until(b"]");
        assert_eq!(cur.slice(0, cur.pos()), "héllo");
    }
}
