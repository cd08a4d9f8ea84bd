/// A cursor for character-by-character inline scanning.
///
/// Delimiters are all ASCII, so byte searches for them can start at any
/// offset; the cursor itself only ever rests on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.starts_with_at(self.i, pat)
    }

    /// Checks if the input at byte offset `at` starts with `pat`.
    pub fn starts_with_at(&self, at: usize, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(at..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances past one whole character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves the cursor to byte offset `to`, which must be a char boundary.
    pub fn jump_to(&mut self, to: usize) {
        debug_assert!(self.s.is_char_boundary(to));
        self.i = to;
    }

    /// Finds the first occurrence of `byte` at or after offset `from`.
    pub fn find_byte(&self, byte: u8, from: usize) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&b| b == byte)
            .map(|off| from + off)
    }

    /// Finds the first occurrence of `pat` starting at or after offset `from`.
    pub fn find_seq(&self, pat: &[u8], from: usize) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|off| from + off)
    }

    /// Slices the underlying string; both ends must be char boundaries.
    pub fn slice(&self, range: std::ops::Range<usize>) -> &'a str {
        &self.s[range]
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
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn bump_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("日本");
        assert_eq!(cur.bump(), Some('日'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.bump(), Some('本'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"*"));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("*a");
        assert!(!cur.starts_with(b"**"));
        cur.bump();
        assert!(cur.starts_with(b"a"));
        assert!(!cur.starts_with_at(10, b"a"));
    }

    #[test]
    fn find_byte_from_offset() {
        let cur = Cursor::new("*a*b*");
        assert_eq!(cur.find_byte(b'*', 0), Some(0));
        assert_eq!(cur.find_byte(b'*', 1), Some(2));
        assert_eq!(cur.find_byte(b'*', 5), None);
        assert_eq!(cur.find_byte(b'*', 50), None);
    }

    #[test]
    fn find_seq_inside_multibyte_text() {
        // Searching may start inside a multibyte char; ASCII never matches there.
        let cur = Cursor::new("**日**");
        assert_eq!(cur.find_seq(b"**", 3), Some(5));
        assert_eq!(cur.slice(2..5), "日");
    }
}
