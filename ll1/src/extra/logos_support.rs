use logos::Logos;

use crate::Token;

/// Terminal name given to input the scanner could not recognise
pub const ERROR_TERMINAL: &str = "error";

/// Maps scanner tokens onto the terminal names used in a grammar
pub trait TerminalName {
    fn terminal_name(&self) -> &'static str;
}

/// Token stream over a `logos` lexer
///
/// Byte spans are turned into 1-based line and column numbers as the lexer advances. Input the
/// lexer rejects is passed on as an `error` token, which no grammar is expected to accept.
pub struct LogosTokens<'source, T>
where
    T: Logos<'source, Source = str>,
{
    lexer: logos::Lexer<'source, T>,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'source, T> LogosTokens<'source, T>
where
    T: Logos<'source, Source = str>,
{
    pub fn new(lexer: logos::Lexer<'source, T>) -> Self {
        LogosTokens {
            lexer,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn seek(&mut self, offset: usize) {
        let source: &'source str = self.lexer.source();
        for c in source[self.offset..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
    }
}

impl<'source, T> Iterator for LogosTokens<'source, T>
where
    T: Logos<'source, Source = str> + TerminalName,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let result = self.lexer.next()?;
        let span = self.lexer.span();
        self.seek(span.start);
        let kind = match result {
            Ok(token) => token.terminal_name(),
            Err(_) => ERROR_TERMINAL,
        };
        Some(Token::new(kind, self.lexer.slice(), self.line, self.column))
    }
}
