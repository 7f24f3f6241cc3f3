use crate::keywords;
use crate::token::{Token, TokenKind};

/// D2 source scanner.
///
/// Classifies a buffer (or a sub-range of one) into a contiguous stream of
/// tokens. The scanner is a plain cursor over an immutable `&str`: it holds
/// no state besides position and bounds, so a fresh instance can pick up
/// scanning from any offset and concurrent scans over shared buffers need
/// no coordination.
///
/// The scanner is total. Any byte sequence — binary garbage, half-typed
/// connections, unclosed strings — produces a token stream that exactly
/// tiles the scanned range, and every token consumes at least one
/// character, so scanning always terminates. Malformed input degrades into
/// `BadCharacter` tokens or delimited tokens extended to end-of-range;
/// there is no error path.
///
/// Dispatch is an ordered first-match rule list. Multi-character
/// punctuation is tested longest first (`<->` before `->` and `<-`) so a
/// prefix never steals a longer operator.
pub struct Scanner<'a> {
    buffer: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Scanner over the whole buffer.
    pub fn new(buffer: &'a str) -> Self {
        Self::with_range(buffer, 0, buffer.len())
    }

    /// Scanner over `[start, end)`. Both bounds are byte offsets and must
    /// lie on character boundaries.
    pub fn with_range(buffer: &'a str, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= buffer.len(), "range out of bounds");
        assert!(
            buffer.is_char_boundary(start) && buffer.is_char_boundary(end),
            "range must fall on character boundaries"
        );
        Self { buffer, pos: start, end }
    }

    /// Tokenize an entire source string. Empty input yields no tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Scanner::new(source).collect()
    }

    /// Current cursor position (byte offset).
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Scan one token and advance past it. Returns `None` once the cursor
    /// has reached the end of the range.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.pos >= self.end {
            return None;
        }
        let start = self.pos;
        let c = self.peek()?;

        let kind = match c {
            c if c.is_whitespace() => {
                // One character per token; runs stay separate tokens.
                self.advance();
                TokenKind::Whitespace
            }
            _ if self.starts_with("\"\"\"") => self.scan_block_comment(),
            '#' => self.scan_line_comment(),
            _ if self.starts_with("<->") => {
                self.pos += 3;
                TokenKind::ArrowBoth
            }
            _ if self.starts_with("->") => {
                self.pos += 2;
                TokenKind::Arrow
            }
            _ if self.starts_with("<-") => {
                self.pos += 2;
                TokenKind::ArrowLeft
            }
            _ if self.starts_with("--") => {
                self.pos += 2;
                TokenKind::Connection
            }
            '|' => self.scan_pipe(),
            '\'' => self.scan_string('\''),
            '"' => self.scan_string('"'),
            ':' => {
                self.pos += 1;
                TokenKind::Colon
            }
            ';' => {
                self.pos += 1;
                TokenKind::Semicolon
            }
            '*' => {
                self.pos += 1;
                // `**` globs are one token; a third star starts a new one.
                if self.peek() == Some('*') {
                    self.pos += 1;
                }
                TokenKind::Star
            }
            '{' => {
                self.pos += 1;
                TokenKind::LBrace
            }
            '}' => {
                self.pos += 1;
                TokenKind::RBrace
            }
            '(' => {
                self.pos += 1;
                TokenKind::LParen
            }
            ')' => {
                self.pos += 1;
                TokenKind::RParen
            }
            '[' => {
                self.pos += 1;
                TokenKind::LBracket
            }
            ']' => {
                self.pos += 1;
                TokenKind::RBracket
            }
            c if c.is_ascii_digit() || (c == '-' && self.second_is_digit()) => {
                self.scan_number_or_word(start)
            }
            c if c.is_alphabetic() || c == '_' => self.scan_word(start),
            '\\' => {
                // Escape-skip: the backslash and the escaped character pass
                // through as one non-significant token, uninterpreted.
                self.pos += 1;
                if self.pos < self.end {
                    self.advance();
                }
                TokenKind::Whitespace
            }
            _ => {
                self.advance();
                TokenKind::BadCharacter
            }
        };

        Some(Token::new(kind, start, self.pos))
    }

    // --- Delimited scanners ---

    /// `"""` ... `"""`, closing delimiter included. Consumes to end of
    /// range when unterminated.
    fn scan_block_comment(&mut self) -> TokenKind {
        self.pos += 3;
        match self.rest().find("\"\"\"") {
            Some(i) => self.pos += i + 3,
            None => self.pos = self.end,
        }
        TokenKind::BlockComment
    }

    /// `#` to end of line, newline excluded.
    fn scan_line_comment(&mut self) -> TokenKind {
        self.pos += 1;
        match self.rest().find('\n') {
            Some(i) => self.pos += i,
            None => self.pos = self.end,
        }
        TokenKind::Comment
    }

    /// A `|` directly followed by content (or a newline) opens a multiline
    /// string running through the closing `|`, or to end of range. A `|`
    /// followed by ordinary whitespace, or ending the range, stays a
    /// single-character token.
    fn scan_pipe(&mut self) -> TokenKind {
        self.pos += 1;
        if self.peek().is_some_and(|c| c == '\n' || !c.is_whitespace()) {
            match self.rest().find('|') {
                Some(i) => self.pos += i + 1,
                None => self.pos = self.end,
            }
        }
        TokenKind::Pipe
    }

    /// Quoted string. A backslash escapes the following character (both
    /// stay in the token, uninterpreted). Unterminated strings run to end
    /// of range.
    fn scan_string(&mut self, quote: char) -> TokenKind {
        self.pos += 1;
        while let Some(c) = self.peek() {
            if c == quote {
                self.pos += 1;
                break;
            }
            if c == '\\' {
                self.pos += 1;
                if self.pos < self.end {
                    self.advance();
                }
            } else {
                self.advance();
            }
        }
        TokenKind::String
    }

    /// Numeric/identifier disambiguation, maximal munch with identifier
    /// priority. Scan the longest `-?digits(.digits)?` run; if identifier
    /// text continues right after it, the whole contiguous run is one
    /// identifier-shaped token instead: `283.56PLN` never yields a number,
    /// and `3d` comes out a keyword.
    fn scan_number_or_word(&mut self, start: usize) -> TokenKind {
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        self.eat_digits();
        if self.peek() == Some('.') && self.second_is_digit() {
            self.pos += 1;
            self.eat_digits();
        }
        if self.peek().is_some_and(is_identifier_part) {
            self.pos = start;
            return self.scan_word(start);
        }
        TokenKind::Number
    }

    /// Identifier/keyword run: letters, digits, `-`, `_`, `.`.
    /// Classified against the keyword table only once fully scanned.
    fn scan_word(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(is_identifier_part) {
            self.advance();
        }
        if keywords::is_keyword(&self.buffer[start..self.pos]) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    // --- Cursor helpers ---

    fn rest(&self) -> &'a str {
        &self.buffer[self.pos..self.end]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn second_is_digit(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().is_some_and(|c| c.is_ascii_digit())
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.'
}
