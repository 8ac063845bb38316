//! Scanner for the surface syntax of propositional formulas.
//!
//! The token alphabet is `IDENT ~ & | > = ( )` plus the end-of-line
//! terminator. Anything else (spaces, tabs, stray punctuation) is
//! discarded without complaint, so scanning an in-memory string never
//! fails. End-of-input is simply the end of the token vector.

use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{anychar, one_of};
use nom::IResult;
use nom_locate::LocatedSpan;

type Span<'a> = LocatedSpan<&'a str>;

/// Lexeme classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier atom: `[A-Za-z0-9_]+`.
    Ident,
    /// Negation `~`.
    Not,
    /// Conjunction `&`.
    And,
    /// Disjunction `|`.
    Or,
    /// Material implication `>`.
    Implies,
    /// Material equivalence `=`.
    Equiv,
    LParen,
    RParen,
    /// The formula terminator.
    Eol,
}

impl TokenKind {
    /// Kind name as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Implies => "IMPLIES",
            TokenKind::Equiv => "EQUIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eol => "EOL",
        }
    }
}

/// One lexeme together with its position in the input, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: usize,
}

impl Token {
    #[cfg(test)]
    fn new<S: Into<String>>(kind: TokenKind, text: S, line: u32, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

pub type Tokens = Vec<Token>;

/// Scan `input` into its token stream.
pub fn lex(input: &str) -> Tokens {
    let mut tokens = Vec::new();
    let mut rest = Span::new(input);

    while !rest.fragment().is_empty() {
        match token(rest) {
            Ok((remaining, tok)) => {
                tokens.push(tok);
                rest = remaining;
            }
            Err(_) => {
                // Not part of the alphabet: drop one character and resume.
                let skipped: IResult<Span, char> = anychar(rest);
                match skipped {
                    Ok((remaining, _)) => rest = remaining,
                    Err(_) => break,
                }
            }
        }
    }

    tokens
}

fn token(input: Span) -> IResult<Span, Token> {
    alt((ident, symbol))(input)
}

fn ident(input: Span) -> IResult<Span, Token> {
    let line = input.location_line();
    let column = input.get_utf8_column();
    let (rest, name) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)?;

    Ok((
        rest,
        Token {
            kind: TokenKind::Ident,
            text: (*name.fragment()).to_string(),
            line,
            column,
        },
    ))
}

fn symbol(input: Span) -> IResult<Span, Token> {
    let line = input.location_line();
    let column = input.get_utf8_column();
    let (rest, c) = one_of("~&|>=()\n")(input)?;

    let kind = match c {
        '~' => TokenKind::Not,
        '&' => TokenKind::And,
        '|' => TokenKind::Or,
        '>' => TokenKind::Implies,
        '=' => TokenKind::Equiv,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        _ => TokenKind::Eol,
    };

    Ok((
        rest,
        Token {
            kind,
            text: c.to_string(),
            line,
            column,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn blank_input() {
        assert!(lex(" \t ").is_empty());
    }

    #[test]
    fn single_operators() {
        assert_eq!(vec![TokenKind::Not], kinds("~"));
        assert_eq!(vec![TokenKind::And], kinds("&"));
        assert_eq!(vec![TokenKind::Or], kinds("|"));
        assert_eq!(vec![TokenKind::Implies], kinds(">"));
        assert_eq!(vec![TokenKind::Equiv], kinds("="));
        assert_eq!(vec![TokenKind::LParen], kinds("("));
        assert_eq!(vec![TokenKind::RParen], kinds(")"));
        assert_eq!(vec![TokenKind::Eol], kinds("\n"));
    }

    #[test]
    fn identifiers() {
        assert_eq!(vec![Token::new(TokenKind::Ident, "p", 1, 1)], lex("p"));
        // Digits and underscores are ordinary identifier characters,
        // including in leading position.
        assert_eq!(vec![Token::new(TokenKind::Ident, "0_q9", 1, 1)], lex("0_q9"));
    }

    #[test]
    fn foreign_characters_are_skipped() {
        assert_eq!(
            vec![
                Token::new(TokenKind::Ident, "p", 1, 3),
                Token::new(TokenKind::And, "&", 1, 7),
                Token::new(TokenKind::Ident, "q", 1, 9),
            ],
            lex("@!p $ & q")
        );
    }

    #[test]
    fn positions_track_lines() {
        let tokens = lex("p\nq");
        assert_eq!(
            vec![
                Token::new(TokenKind::Ident, "p", 1, 1),
                Token::new(TokenKind::Eol, "\n", 1, 2),
                Token::new(TokenKind::Ident, "q", 2, 1),
            ],
            tokens
        );
    }

    #[test]
    fn complex_formula() {
        assert_eq!(
            vec![
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Implies,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::Implies,
                TokenKind::LParen,
                TokenKind::Not,
                TokenKind::Ident,
                TokenKind::Implies,
                TokenKind::Not,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::Eol,
            ],
            kinds("(p > q) > (~q > ~p)\n")
        );
    }
}
