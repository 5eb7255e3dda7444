use super::Column;

/// Read position into one input line.
///
/// The position is a byte offset that always sits on a `char` boundary.
/// [`Cursor::column`] converts it to the character column used for errors.
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Cursor<'a> {
        Cursor { line, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn column(&self) -> Column {
        self.line[..self.pos].chars().count()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.line.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|ch| ch == expected)
    }

    pub fn eat_if<F: Fn(char) -> bool>(&mut self, pred: F) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.pos += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of chars matching `pred` and returns it.
    pub fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let start = self.pos;
        while self.eat_if(&pred) {}
        self.slice_from(start)
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.line[start..self.pos]
    }

    /// Steps back over `len` bytes that were just consumed.
    pub fn retreat(&mut self, len: usize) {
        debug_assert!(len <= self.pos);
        self.pos -= len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_while() {
        let mut c = Cursor::new("abc12");
        assert_eq!(c.take_while(char::is_alphabetic), "abc");
        assert_eq!(c.position(), 3);
        assert_eq!(c.take_while(char::is_alphabetic), "");
        assert_eq!(c.rest(), "12");
    }

    #[test]
    fn test_skip_whitespace_to_end() {
        let mut c = Cursor::new(" \t ");
        c.skip_whitespace();
        assert!(c.is_at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.bump(), None);
    }

    #[test]
    fn test_eat() {
        let mut c = Cursor::new("let=");
        assert!(!c.eat_str("lex"));
        assert!(c.eat_str("let"));
        assert!(!c.eat('('));
        assert!(c.eat('='));
        assert!(c.is_at_end());
    }

    #[test]
    fn test_retreat() {
        let mut c = Cursor::new("1+foo");
        c.bump();
        c.bump();
        let name = c.take_while(char::is_alphabetic);
        c.retreat(name.len());
        assert_eq!(c.column(), 2);
        assert_eq!(c.rest(), "foo");
    }

    #[test]
    fn test_column_counts_chars() {
        let mut c = Cursor::new("éé+");
        c.take_while(char::is_alphabetic);
        assert_eq!(c.position(), 4);
        assert_eq!(c.column(), 2);
    }
}
