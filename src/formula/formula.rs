//! A propositional formula and its canonical rendering.

use std::fmt;

use super::operators::BinaryOperator;
use super::variable::Variable;

/// A propositional formula, defined inductively:
///
/// ```ebnf
/// <formula>
///     ::= <identifier>
///     | ~ <formula>
///     | <formula> & <formula>
///     | <formula> | <formula>
///     | <formula> > <formula>
///     | <formula> = <formula>
/// ```
///
/// Trees are immutable once the parser has produced them. The tableau never
/// clones a formula; it borrows shared references into parser-owned trees,
/// so plain `Box` indirection is all the ownership machinery we need.
///
/// The `Display` implementation is the *canonical rendering*: an in-order
/// traversal that parenthesizes a child exactly when that child's
/// connective is binary. The tableau compares these rendered strings to
/// detect contradictions, so the rendering must stay deterministic and
/// total over everything the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Base case: a single identifier atom.
    Ident(Variable),
    /// Negated sub-formula.
    Negation(Box<Formula>),
    /// Two sub-formulas joined by a binary connective.
    Binary(BinaryOperator, Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Construct an identifier leaf.
    #[inline]
    pub fn ident<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self::Ident(Variable::new(name))
    }

    /// Construct the negation of `operand`.
    #[inline]
    pub fn negation(operand: Formula) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// Construct `left <op> right`.
    #[inline]
    pub fn binary(op: BinaryOperator, left: Formula, right: Formula) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    /// Construct `left & right`.
    #[inline]
    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    /// Construct `left | right`.
    #[inline]
    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    /// Construct `left > right`.
    #[inline]
    pub fn implication(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOperator::Implies, left, right)
    }

    /// Construct `left = right`.
    #[inline]
    pub fn equivalence(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOperator::Equiv, left, right)
    }

    /// An identifier occurrence has no inference rule; the tableau treats
    /// it as used from birth.
    pub fn is_ident(&self) -> bool {
        matches!(self, Self::Ident(_))
    }

    fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(..))
    }

    /// Render a sub-formula, parenthesized iff its connective is binary.
    fn fmt_child(child: &Formula, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if child.is_binary() {
            write!(f, "({})", child)
        } else {
            write!(f, "{}", child)
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Ident(v) => write!(f, "{}", v),
            Formula::Negation(operand) => {
                write!(f, "~")?;
                Formula::fmt_child(operand, f)
            }
            Formula::Binary(op, left, right) => {
                Formula::fmt_child(left, f)?;
                write!(f, " {} ", op)?;
                Formula::fmt_child(right, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn ident_renders_bare() {
        check!("p" == Formula::ident("p").to_string());
    }

    #[test]
    fn negation_of_ident_is_unparenthesized() {
        check!("~p" == Formula::negation(Formula::ident("p")).to_string());
    }

    #[test]
    fn nested_negation_is_unparenthesized() {
        let f = Formula::negation(Formula::negation(Formula::ident("p")));
        check!("~~p" == f.to_string());
    }

    #[test]
    fn negation_of_binary_is_parenthesized() {
        let f = Formula::negation(Formula::conjunction(
            Formula::ident("p"),
            Formula::ident("q"),
        ));
        check!("~(p & q)" == f.to_string());
    }

    #[test]
    fn binary_children_are_parenthesized_iff_binary() {
        let f = Formula::implication(
            Formula::disjunction(Formula::ident("p"), Formula::ident("q")),
            Formula::negation(Formula::ident("r")),
        );
        check!("(p | q) > ~r" == f.to_string());
    }

    #[test]
    fn equivalence_symbol() {
        let f = Formula::equivalence(Formula::ident("p"), Formula::ident("q"));
        check!("p = q" == f.to_string());
    }
}
