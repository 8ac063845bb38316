//! Human-readable trace of a tableau, branch segment by branch segment.

use std::collections::VecDeque;
use std::io::{self, Write};

use super::Tableau;

impl<'t> Tableau<'t> {
    /// Write the tableau trace.
    ///
    /// Each segment follows left-child links from its starting occurrence
    /// as far as they go; a fork ends the segment and queues both
    /// children as new segments. Every line shows the occurrence's
    /// number, sign and expression, cites the line it was inferred from
    /// in parentheses, and names the contradicted line when the
    /// occurrence closes its branch. A segment ending in an open leaf is
    /// flagged as an open branch.
    pub fn write_trace<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut queue = VecDeque::new();
        queue.push_back(self.root());
        let mut first = true;

        while let Some(start) = queue.pop_front() {
            if !first {
                writeln!(w)?;
            }
            first = false;

            let mut cursor = Some(start);
            while let Some(id) = cursor {
                let node = self.node(id);

                write!(w, "{}. {}: {}", node.line_number, node.sign, node.expression)?;
                if let Some(from) = node.inferred_from {
                    write!(w, " ({})", self.node(from).line_number)?;
                }
                if let Some(contradicted) = node.contradictory {
                    write!(w, " contradicts {}", self.node(contradicted).line_number)?;
                }
                writeln!(w)?;

                cursor = match (node.left, node.right) {
                    (Some(left), Some(right)) => {
                        queue.push_back(left);
                        queue.push_back(right);
                        None
                    }
                    (Some(left), None) => Some(left),
                    (None, Some(right)) => Some(right),
                    (None, None) => {
                        if !node.closed {
                            writeln!(w, "open branch")?;
                        }
                        None
                    }
                };
            }
        }

        Ok(())
    }
}
