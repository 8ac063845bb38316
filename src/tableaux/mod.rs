//! The tableau engine: the signed proof tree, rule application with
//! contradiction detection, and the outer proof-search loop.
//!
//! A tableau refutes an assumption. Seeding signs the target formula `F`
//! (and any hypotheses `T`); if expanding every obligation closes every
//! branch, the assumption that the target can fail is contradictory and
//! the entailment holds.

pub mod dot;
pub mod tnode;
pub mod trace;

pub use tnode::{Inference, Sign, SignedFormula, Tnode, TnodeId};

use std::ops::Index;

use log::debug;

use crate::error::Error;
use crate::formula::Formula;

/// Verdict of a finished proof search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every branch closed: the seeded formula is a tautology, or the
    /// seeded conclusion follows from its hypotheses.
    Closed,
    /// Some branch saturated without closing: the entailment fails.
    Open,
}

/// A signed-tableau proof tree.
///
/// Nodes live in a dense arena and name each other by [`TnodeId`], which
/// keeps parent back-links cycle-free while preserving O(1) navigation.
/// The line counter is a field, not a process global, so independent
/// proofs number their nodes independently and deterministically.
///
/// The proof search is single-threaded and deterministic; nodes are only
/// ever added, never removed or rewritten beyond the one-shot child/flag
/// writes performed during expansion.
pub struct Tableau<'t> {
    nodes: Vec<Tnode<'t>>,
    next_line: u32,
}

impl<'t> Tableau<'t> {
    /// Seed a tableau asking "is `formula` a tautology?": the root denies
    /// the formula, and its rule is applied at once with the root serving
    /// as its own expansion target.
    pub fn for_formula(formula: &'t Formula) -> Result<Self, Error> {
        let mut tableau = Self::empty();
        let root = tableau.create(Sign::False, formula, None, None);
        tableau.subjoin(root, root)?;
        tableau.nodes[root.0].used = true;
        Ok(tableau)
    }

    /// Seed a tableau asking "does `conclusion` follow from
    /// `hypotheses`?": a linear chain asserting every hypothesis above the
    /// denied conclusion. No rule is applied at seed time.
    pub fn for_consequence(hypotheses: &'t [Formula], conclusion: &'t Formula) -> Self {
        let mut tableau = Self::empty();
        let mut parent = None;
        for hypothesis in hypotheses {
            let id = match parent {
                Some(p) => tableau.attach_below(p, (Sign::True, hypothesis), None),
                None => tableau.create(Sign::True, hypothesis, None, None),
            };
            parent = Some(id);
        }
        match parent {
            Some(p) => tableau.attach_below(p, (Sign::False, conclusion), None),
            None => tableau.create(Sign::False, conclusion, None, None),
        };
        tableau
    }

    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            next_line: 1,
        }
    }

    /// Run the proof search to completion.
    ///
    /// Each iteration scans the open leaves in depth-first order; the
    /// first leaf with a pending obligation (an unused occurrence on its
    /// path, the one closest to the root) drives the next expansion,
    /// which subjoins that occurrence's inferences below every open leaf
    /// of its subtree. No open leaf with an obligation means every open
    /// branch is saturated; no open leaf at all means the tableau closed.
    pub fn prove(&mut self) -> Result<Verdict, Error> {
        loop {
            let open_leaves = self.open_leaves(self.root());
            if open_leaves.is_empty() {
                debug!("every branch closed");
                return Ok(Verdict::Closed);
            }

            let mut expanded = false;
            for leaf in open_leaves {
                if let Some(obligation) = self.tallest_unused(leaf) {
                    debug!(
                        "expanding line {} ({}: {}) below line {}",
                        self[obligation].line_number,
                        self[obligation].sign,
                        self[obligation].expression,
                        self[leaf].line_number,
                    );
                    for target in self.open_leaves(obligation) {
                        self.subjoin(obligation, target)?;
                    }
                    self.nodes[obligation.0].used = true;
                    expanded = true;
                    break;
                }
            }

            if !expanded {
                debug!("every open branch is saturated");
                return Ok(Verdict::Open);
            }
        }
    }

    /// Apply `from`'s inference rule at the open leaf `target`, appending
    /// the inferred occurrences and running the contradiction check on
    /// each. Identifier occurrences have no rule; applying one is a no-op.
    ///
    /// In a two-node chain the second occurrence is only attached when the
    /// first stays open: descending into a closed branch is forbidden.
    pub fn subjoin(&mut self, from: TnodeId, target: TnodeId) -> Result<(), Error> {
        let inference = match self[from].inference() {
            Some(inference) => inference,
            None => return Ok(()),
        };

        let t = &self[target];
        if t.closed || t.left.is_some() || t.right.is_some() {
            return Err(Error::InvariantViolation {
                sign: t.sign.to_string(),
                expression: t.expression.clone(),
            });
        }

        match inference {
            Inference::Alpha(first, second) => {
                let id = self.attach_below(target, first, Some(from));
                if let Some(second) = second {
                    if !self[id].closed {
                        self.attach_below(id, second, Some(from));
                    }
                }
            }
            Inference::Beta(left, right) => {
                self.attach_below(target, left, Some(from));
                self.attach_right(target, right, Some(from));
            }
            Inference::Equivalence { left, right } => {
                let l = self.attach_below(target, left[0], Some(from));
                if !self[l].closed {
                    self.attach_below(l, left[1], Some(from));
                }
                let r = self.attach_right(target, right[0], Some(from));
                if !self[r].closed {
                    self.attach_below(r, right[1], Some(from));
                }
            }
        }

        Ok(())
    }

    /// The root occurrence. Both seeding forms create at least one node.
    pub fn root(&self) -> TnodeId {
        TnodeId(0)
    }

    pub fn node(&self, id: TnodeId) -> &Tnode<'t> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All occurrences in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TnodeId, &Tnode<'t>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (TnodeId(i), n))
    }

    /// Create an occurrence and run its contradiction check. The caller
    /// links it to its parent's child slot.
    fn create(
        &mut self,
        sign: Sign,
        tree: &'t Formula,
        parent: Option<TnodeId>,
        inferred_from: Option<TnodeId>,
    ) -> TnodeId {
        let id = TnodeId(self.nodes.len());
        let line_number = self.next_line;
        self.next_line += 1;

        self.nodes.push(Tnode {
            line_number,
            sign,
            tree,
            expression: tree.to_string(),
            parent,
            left: None,
            right: None,
            used: tree.is_ident(),
            closed: false,
            contradictory: None,
            inferred_from,
        });

        if let Some(ancestor) = self.contradicting_ancestor(id) {
            self.nodes[id.0].closed = true;
            self.nodes[id.0].contradictory = Some(ancestor);
            debug!(
                "line {} contradicts line {}",
                self.nodes[id.0].line_number, self.nodes[ancestor.0].line_number
            );
        }

        id
    }

    /// Attach a fresh occurrence in `parent`'s linear (left) slot.
    fn attach_below(
        &mut self,
        parent: TnodeId,
        (sign, tree): SignedFormula<'t>,
        inferred_from: Option<TnodeId>,
    ) -> TnodeId {
        let id = self.create(sign, tree, Some(parent), inferred_from);
        self.nodes[parent.0].left = Some(id);
        id
    }

    /// Attach a fresh occurrence in `parent`'s right (fork) slot.
    fn attach_right(
        &mut self,
        parent: TnodeId,
        (sign, tree): SignedFormula<'t>,
        inferred_from: Option<TnodeId>,
    ) -> TnodeId {
        let id = self.create(sign, tree, Some(parent), inferred_from);
        self.nodes[parent.0].right = Some(id);
        id
    }

    /// The nearest-to-root ancestor holding the same expression under the
    /// opposite sign, if any.
    fn contradicting_ancestor(&self, id: TnodeId) -> Option<TnodeId> {
        let node = &self.nodes[id.0];
        let mut cursor = node.parent;
        while let Some(ancestor) = cursor {
            let a = &self.nodes[ancestor.0];
            if a.sign != node.sign && a.expression == node.expression {
                return Some(ancestor);
            }
            cursor = a.parent;
        }
        None
    }

    /// Open leaves of the subtree at `start`, depth-first, left before
    /// right.
    fn open_leaves(&self, start: TnodeId) -> Vec<TnodeId> {
        let mut leaves = Vec::new();
        self.collect_open_leaves(start, &mut leaves);
        leaves
    }

    fn collect_open_leaves(&self, id: TnodeId, leaves: &mut Vec<TnodeId>) {
        let node = &self.nodes[id.0];
        if node.left.is_none() && node.right.is_none() {
            if !node.closed {
                leaves.push(id);
            }
            return;
        }
        if let Some(left) = node.left {
            self.collect_open_leaves(left, leaves);
        }
        if let Some(right) = node.right {
            self.collect_open_leaves(right, leaves);
        }
    }

    /// Walking from `leaf` toward the root, the leaf itself included:
    /// the unused occurrence closest to the root. Identifier occurrences
    /// are born used, so unused composites can sit above or below used
    /// identifiers; taking the tallest keeps branches linear as long as
    /// possible before forking.
    fn tallest_unused(&self, leaf: TnodeId) -> Option<TnodeId> {
        let mut tallest = None;
        let mut cursor = Some(leaf);
        while let Some(id) = cursor {
            if !self.nodes[id.0].used {
                tallest = Some(id);
            }
            cursor = self.nodes[id.0].parent;
        }
        tallest
    }
}

impl<'t> Index<TnodeId> for Tableau<'t> {
    type Output = Tnode<'t>;

    fn index(&self, id: TnodeId) -> &Tnode<'t> {
        &self.nodes[id.0]
    }
}
