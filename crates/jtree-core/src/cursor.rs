//! Character cursor over a document with line tracking.
//!
//! The parser consumes the input one character at a time and sometimes needs
//! to look one character ahead (to end a number token, or to check for an
//! empty collection). The cursor supports exactly one character of pushback
//! and keeps a 1-based line counter, which is the only state diagnostics use.
//! End of input is `None`, never confused with a valid character.

/// Single-pass cursor over the document text.
pub(crate) struct Cursor<'a> {
    chars: std::str::Chars<'a>,
    pushed: Option<char>,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            chars: input.chars(),
            pushed: None,
            line: 1,
        }
    }

    /// Current 1-based line number.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Next character, or `None` at end of input. Reading a newline
    /// advances the line counter.
    pub(crate) fn next(&mut self) -> Option<char> {
        let c = match self.pushed.take() {
            Some(c) => Some(c),
            None => self.chars.next(),
        };
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// Return one character to the stream. Only a single character of
    /// lookahead is supported. Pushing a newline back rewinds the line
    /// counter so diagnostics after a peek stay accurate.
    pub(crate) fn pushback(&mut self, c: char) {
        debug_assert!(self.pushed.is_none(), "cursor holds one pushback");
        if c == '\n' {
            self.line -= 1;
        }
        self.pushed = Some(c);
    }

    /// Skip whitespace and consume the next significant character.
    pub(crate) fn next_nonspace(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(c) if c.is_ascii_whitespace() => continue,
                other => return other,
            }
        }
    }

    /// Look at the next significant character without consuming it.
    pub(crate) fn peek_nonspace(&mut self) -> Option<char> {
        let c = self.next_nonspace();
        if let Some(c) = c {
            self.pushback(c);
        }
        c
    }
}
