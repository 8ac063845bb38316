//! Binary connectives of propositional formulas. Negation, the only unary
//! connective, is a dedicated [`Formula`] variant instead.
//!
//! [`Formula`]: super::Formula

use std::fmt;

/// The four binary connectives.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum BinaryOperator {
    And,
    Or,
    Implies,
    Equiv,
}

impl BinaryOperator {
    /// The surface-syntax character for this connective.
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::And => '&',
            BinaryOperator::Or => '|',
            BinaryOperator::Implies => '>',
            BinaryOperator::Equiv => '=',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
