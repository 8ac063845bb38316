//! Error taxonomy for the whole pipeline: parse failures, internal
//! invariant violations, and I/O.

use thiserror::Error;

/// Everything that can go wrong between reading a formula and writing the
/// verdict.
///
/// Parse failures carry the offending token's textual form, its kind name
/// and its position, so diagnostics can point at the exact lexeme. The
/// scanner itself is total: any character outside the token alphabet is
/// silently skipped, so there is no lex-level failure on in-memory input;
/// unreadable streams surface as [`Error::Io`].
#[derive(Debug, Error)]
pub enum Error {
    /// A factor position held something other than an identifier, `(` or `~`.
    #[error("found token {found:?}, type {kind}, instead of IDENT, LPAREN or NOT at line {line}, column {column}")]
    UnexpectedToken {
        found: String,
        kind: &'static str,
        line: u32,
        column: usize,
    },

    /// A `(` was never balanced by a `)`.
    #[error("expected token type RPAREN, found {kind} ({found:?})")]
    MissingRightParen { found: String, kind: &'static str },

    /// Trailing tokens where the formula terminator should be.
    #[error("expected token type EOL, found {kind} ({found:?})")]
    MissingEndOfLine { found: String, kind: &'static str },

    /// The inference dispatcher was driven against an occurrence it must
    /// not expand. Indicates a bug in the proof-search driver, never bad
    /// user input.
    #[error("cannot subjoin inferences at {sign}: {expression}")]
    InvariantViolation { sign: String, expression: String },

    /// Graph output or another stream operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
