//! Recursive-descent parser for propositional formulas.
//!
//! Precedence climbs from equivalence (loosest) through implication,
//! disjunction and conjunction down to factors; every binary level is
//! left-associative and `~` binds tightest:
//!
//! ```ebnf
//! formula      ::= equivalence EOL
//! equivalence  ::= implication { '=' implication }
//! implication  ::= disjunction { '>' disjunction }
//! disjunction  ::= conjunction { '|' conjunction }
//! conjunction  ::= factor      { '&' factor }
//! factor       ::= IDENT | '(' equivalence ')' | '~' factor
//! ```

use crate::error::Error;
use crate::formula::{BinaryOperator, Formula};
use crate::lexer::{self, Token, TokenKind};

/// Parse one formula from `input`.
///
/// This is the front-end entry point used by the driver and the tests. The
/// grammar requires an end-of-line terminator; formulas arriving from the
/// command line have none, so one is appended on their behalf.
pub fn parse(input: &str) -> Result<Formula, Error> {
    let mut owned;
    let text = if input.ends_with('\n') {
        input
    } else {
        owned = String::with_capacity(input.len() + 1);
        owned.push_str(input);
        owned.push('\n');
        &owned
    };

    let tokens = lexer::lex(text);
    Parser::new(&tokens).parse()
}

/// Token-stream parser producing a syntax tree.
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse `equivalence EOL`. Tokens after the terminator are ignored.
    pub fn parse(mut self) -> Result<Formula, Error> {
        let tree = self.equivalence()?;
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Eol => Ok(tree),
            other => Err(Error::MissingEndOfLine {
                found: found_text(other),
                kind: found_kind(other),
            }),
        }
    }

    fn equivalence(&mut self) -> Result<Formula, Error> {
        self.binary_level(TokenKind::Equiv, BinaryOperator::Equiv, Self::implication)
    }

    fn implication(&mut self) -> Result<Formula, Error> {
        self.binary_level(TokenKind::Implies, BinaryOperator::Implies, Self::disjunction)
    }

    fn disjunction(&mut self) -> Result<Formula, Error> {
        self.binary_level(TokenKind::Or, BinaryOperator::Or, Self::conjunction)
    }

    fn conjunction(&mut self) -> Result<Formula, Error> {
        self.binary_level(TokenKind::And, BinaryOperator::And, Self::factor)
    }

    /// One left-associative precedence level: `operand { token operand }`.
    fn binary_level(
        &mut self,
        token: TokenKind,
        op: BinaryOperator,
        mut operand: impl FnMut(&mut Self) -> Result<Formula, Error>,
    ) -> Result<Formula, Error> {
        let mut tree = operand(self)?;
        while self.eat(token) {
            let right = operand(self)?;
            tree = Formula::binary(op, tree, right);
        }
        Ok(tree)
    }

    fn factor(&mut self) -> Result<Formula, Error> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Ident => {
                let name = tok.text.clone();
                self.pos += 1;
                Ok(Formula::ident(name))
            }
            Some(tok) if tok.kind == TokenKind::LParen => {
                self.pos += 1;
                let tree = self.equivalence()?;
                match self.peek() {
                    Some(tok) if tok.kind == TokenKind::RParen => {
                        self.pos += 1;
                        Ok(tree)
                    }
                    other => Err(Error::MissingRightParen {
                        found: found_text(other),
                        kind: found_kind(other),
                    }),
                }
            }
            Some(tok) if tok.kind == TokenKind::Not => {
                self.pos += 1;
                Ok(Formula::negation(self.factor()?))
            }
            other => Err(Error::UnexpectedToken {
                found: found_text(other),
                kind: found_kind(other),
                line: other.map_or(0, |t| t.line),
                column: other.map_or(0, |t| t.column),
            }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token iff it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

fn found_text(token: Option<&Token>) -> String {
    match token {
        Some(tok) => tok.text.clone(),
        None => String::new(),
    }
}

fn found_kind(token: Option<&Token>) -> &'static str {
    match token {
        Some(tok) => tok.kind.name(),
        None => "EOF",
    }
}
