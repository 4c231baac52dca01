use std::fmt;

/// Location of a token in the scanned source, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A lexical unit handed to the parse driver by an external scanner
///
/// `kind` names the grammar terminal the token stands for (`id`, `+`, `while`, ...), while `text`
/// keeps the literal slice of source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new<K, S>(kind: K, text: S, line: usize, column: usize) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        Token {
            kind: kind.into(),
            text: text.into(),
            position: Position::new(line, column),
        }
    }

    /// Position just past the last character of this token
    pub fn end_position(&self) -> Position {
        Position::new(
            self.position.line,
            self.position.column + self.text.chars().count(),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.text.is_empty() || self.text == self.kind {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.text)
        }
    }
}
