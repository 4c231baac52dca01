use logos::Logos;

use ll1::extra::TerminalName;

/// Words of the toy source language fed to the parser
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+|//[^\n]*|/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Word {
    #[token("begin")]
    Begin,
    #[token("end")]
    End,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Id,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Num,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("=")]
    Assign,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
}

impl TerminalName for Word {
    fn terminal_name(&self) -> &'static str {
        match self {
            Word::Begin => "begin",
            Word::End => "end",
            Word::If => "if",
            Word::Then => "then",
            Word::Else => "else",
            Word::While => "while",
            Word::Do => "do",
            Word::For => "for",
            Word::Switch => "switch",
            Word::Case => "case",
            Word::Default => "default",
            Word::True => "true",
            Word::False => "false",
            Word::Id => "id",
            Word::Num => "num",
            Word::Str => "str",
            Word::Plus => "+",
            Word::Minus => "-",
            Word::Mul => "*",
            Word::Div => "/",
            Word::Assign => "=",
            Word::Eq => "==",
            Word::Ne => "!=",
            Word::Lt => "<",
            Word::Le => "<=",
            Word::Gt => ">",
            Word::Ge => ">=",
            Word::LParen => "(",
            Word::RParen => ")",
            Word::LBrace => "{",
            Word::RBrace => "}",
            Word::Semicolon => ";",
            Word::Comma => ",",
            Word::Colon => ":",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ll1::extra::LogosTokens;
    use ll1::Token;

    fn kinds(source: &str) -> Vec<String> {
        LogosTokens::new(Word::lexer(source))
            .map(|token: Token| token.kind)
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("while x <= 10 do x = x + 1"),
            vec!["while", "id", "<=", "num", "do", "id", "=", "id", "+", "num"]
        );
        assert_eq!(kinds("iffy"), vec!["id"]);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("a // line comment\n/* block\ncomment */ b"),
            vec!["id", "id"]
        );
        assert_eq!(
            kinds("x /** stars * and / slashes **/ = 1 /**/ ;"),
            vec!["id", "=", "num", ";"]
        );
        assert_eq!(kinds("a / b // c */"), vec!["id", "/", "id"]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(kinds(r#"s = "hi" ; n = 3.5"#), vec!["id", "=", "str", ";", "id", "=", "num"]);
        assert_eq!(kinds("a ? b"), vec!["id", "error", "id"]);
    }
}
