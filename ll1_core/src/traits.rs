use crate::Token;

/// A generic token source
///
/// This trait should be implemented for scanners that can be plugged into the parse driver.
/// Returning `None` ends the stream; the driver reads the end marker from then on.
///
/// Every iterator over `Token`s is a token source, so a `Vec<Token>` can be driven with
/// `tokens.into_iter()`.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Token>;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Token>,
{
    fn next_token(&mut self) -> Option<Token> {
        self.next()
    }
}
