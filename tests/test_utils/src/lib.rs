use lazy_static::lazy_static;
use ll1::{Analysis, Limits, TablePolicy, Token};

/// Expression grammar without left recursion, numbered 1 to 4 after the augmented production
pub const EXPR_GRAMMAR: &str = "\
# expressions joined by `+`
E -> T X
X -> + T X
X -> ε
T -> id
";

lazy_static! {
    pub static ref EXPR: Analysis =
        Analysis::from_source(EXPR_GRAMMAR, Limits::default(), TablePolicy::Strict)
            .expect("expression grammar is LL(1)");
}

/// Split `input` on whitespace into tokens whose kind is the word itself
///
/// Columns count from 1 in characters, all on line 1.
pub fn tokens(input: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut column = 1;
    let mut start: Option<(usize, String)> = None;
    for c in input.chars().chain(std::iter::once(' ')) {
        if c.is_whitespace() {
            if let Some((from, word)) = start.take() {
                result.push(Token::new(&word, &word, 1, from));
            }
        } else {
            match &mut start {
                Some((_, word)) => word.push(c),
                None => start = Some((column, c.to_string())),
            }
        }
        column += 1;
    }
    result
}

/// Like `tokens`, but with an explicit kind and text for each token
pub fn lexed(pairs: &[(&str, &str)]) -> Vec<Token> {
    let mut column = 1;
    pairs
        .iter()
        .map(|(kind, text)| {
            let token = Token::new(*kind, *text, 1, column);
            column += text.chars().count() + 1;
            token
        })
        .collect()
}
