//! Deciding propositional tautology and logical consequence with signed
//! analytic tableaux, in the style of Smullyan.
//!
//! The pipeline runs text → tokens ([`lexer`]) → syntax tree ([`parser`],
//! [`formula`]) → seeded tableau → proof search ([`tableaux`]) → verdict.
//! [`semantics`] is the brute-force truth-table counterpart, useful both
//! as a feature and as an oracle for the engine.

pub mod error;
pub mod formula;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod semantics;
pub mod tableaux;

pub use error::Error;
pub use formula::Formula;
pub use tableaux::{Tableau, Verdict};
