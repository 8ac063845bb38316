//! Signed formula occurrences and their inference rules.

use std::fmt;

use crate::formula::{BinaryOperator, Formula};

/// Truth sign of a tableau occurrence: `T` asserts the formula, `F`
/// denies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    True,
    False,
}

impl Sign {
    /// The opposite sign.
    pub fn flip(self) -> Sign {
        match self {
            Sign::True => Sign::False,
            Sign::False => Sign::True,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::True => "T",
            Sign::False => "F",
        })
    }
}

/// Index of a node in its tableau's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TnodeId(pub(crate) usize);

/// One occurrence of a syntax tree under a truth sign, situated in the
/// tableau's binary tree.
///
/// Links are arena indices rather than pointers, which keeps the
/// parent/child graph cycle-free for ownership purposes. Each of the
/// mutable fields (`left`, `right`, `used`, `closed`, `contradictory`) is
/// written at most once over a node's life; the tableau owner enforces
/// this, the record itself is plain data.
#[derive(Debug)]
pub struct Tnode<'t> {
    /// Creation-ordered identifier, unique within one tableau and strictly
    /// greater than the parent's.
    pub line_number: u32,
    pub sign: Sign,
    /// The formula this occurrence refers to. Occurrences borrow the
    /// driver-owned syntax trees; several may share one subtree.
    pub tree: &'t Formula,
    /// Canonical rendering of `tree`, compared verbatim against ancestors
    /// to detect contradictions.
    pub expression: String,
    /// Nil only at the tableau root.
    pub parent: Option<TnodeId>,
    pub left: Option<TnodeId>,
    pub right: Option<TnodeId>,
    /// True once this occurrence's rule has been applied below every open
    /// leaf descendant. Identifier occurrences are used from birth.
    pub used: bool,
    /// True iff some ancestor carries the same expression under the
    /// opposite sign. Permanent; a closed node's subtree is never extended.
    pub closed: bool,
    /// The contradicting ancestor, when `closed`.
    pub contradictory: Option<TnodeId>,
    /// The occurrence whose rule application created this node; nil for
    /// seeded hypotheses and targets.
    pub inferred_from: Option<TnodeId>,
}

/// A signed sub-formula scheduled for attachment.
pub type SignedFormula<'t> = (Sign, &'t Formula);

/// What one application of an occurrence's inference rule produces.
///
/// | Occurrence  | Result                                        |
/// | ----------- | --------------------------------------------- |
/// | `T: A & B`  | `Alpha(T:A, T:B)`                             |
/// | `F: A \| B` | `Alpha(F:A, F:B)`                             |
/// | `F: A > B`  | `Alpha(T:A, F:B)`                             |
/// | `~A`        | `Alpha` of the operand, sign flipped          |
/// | `F: A & B`  | `Beta(F:A, F:B)`                              |
/// | `T: A \| B` | `Beta(T:A, T:B)`                              |
/// | `T: A > B`  | `Beta(F:A, T:B)`                              |
/// | `T: A = B`  | `Equivalence([T:A, T:B], [F:A, F:B])`         |
/// | `F: A = B`  | `Equivalence([T:A, F:B], [F:A, T:B])`         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference<'t> {
    /// Non-branching: one or two occurrences appended to the same branch.
    Alpha(SignedFormula<'t>, Option<SignedFormula<'t>>),
    /// Branching: one occurrence left, one right.
    Beta(SignedFormula<'t>, SignedFormula<'t>),
    /// Branching into two sub-branches of length two each.
    Equivalence {
        left: [SignedFormula<'t>; 2],
        right: [SignedFormula<'t>; 2],
    },
}

impl<'t> Tnode<'t> {
    /// The inference rule of this occurrence, or `None` for an identifier,
    /// which has no rule.
    ///
    /// The produced references point into the occurrence's own syntax
    /// tree, so the result outlives any borrow of the tableau.
    pub fn inference(&self) -> Option<Inference<'t>> {
        use BinaryOperator::{And, Equiv, Implies, Or};
        use Sign::{False, True};

        match self.tree {
            Formula::Ident(_) => None,
            Formula::Negation(operand) => {
                Some(Inference::Alpha((self.sign.flip(), operand), None))
            }
            Formula::Binary(op, a, b) => {
                let (a, b) = (a.as_ref(), b.as_ref());
                Some(match (*op, self.sign) {
                    (And, True) => Inference::Alpha((True, a), Some((True, b))),
                    (Or, False) => Inference::Alpha((False, a), Some((False, b))),
                    (Implies, False) => Inference::Alpha((True, a), Some((False, b))),
                    (And, False) => Inference::Beta((False, a), (False, b)),
                    (Or, True) => Inference::Beta((True, a), (True, b)),
                    (Implies, True) => Inference::Beta((False, a), (True, b)),
                    (Equiv, True) => Inference::Equivalence {
                        left: [(True, a), (True, b)],
                        right: [(False, a), (False, b)],
                    },
                    (Equiv, False) => Inference::Equivalence {
                        left: [(True, a), (False, b)],
                        right: [(False, a), (True, b)],
                    },
                })
            }
        }
    }
}
