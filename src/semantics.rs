//! Truth-table semantics: brute-force evaluation over all valuations.
//!
//! This is the classical counterpart to the tableau engine. It decides the
//! same questions by enumerating the 2^n valuations of a formula's
//! identifiers, and doubles as the oracle the engine is cross-checked
//! against in tests.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::formula::{BinaryOperator, Formula};

/// A truth assignment to identifier names. Identifiers absent from the map
/// evaluate to false.
pub type Valuation = HashMap<String, bool>;

/// The distinct identifiers of `formula`, sorted by name.
pub fn identifiers(formula: &Formula) -> Vec<String> {
    let mut names = Vec::new();
    collect_identifiers(formula, &mut names);
    names.sort();
    names.dedup();
    names
}

fn collect_identifiers(formula: &Formula, names: &mut Vec<String>) {
    match formula {
        Formula::Ident(v) => names.push(v.name().to_string()),
        Formula::Negation(operand) => collect_identifiers(operand, names),
        Formula::Binary(_, left, right) => {
            collect_identifiers(left, names);
            collect_identifiers(right, names);
        }
    }
}

/// Evaluate `formula` under `valuation`.
pub fn evaluate(formula: &Formula, valuation: &Valuation) -> bool {
    match formula {
        Formula::Ident(v) => valuation.get(v.name()).copied().unwrap_or(false),
        Formula::Negation(operand) => !evaluate(operand, valuation),
        Formula::Binary(op, left, right) => {
            let p = evaluate(left, valuation);
            let q = evaluate(right, valuation);
            match op {
                BinaryOperator::And => p && q,
                BinaryOperator::Or => p || q,
                BinaryOperator::Implies => !p || q,
                BinaryOperator::Equiv => p == q,
            }
        }
    }
}

/// Does every valuation satisfy `formula`?
pub fn is_tautology(formula: &Formula) -> bool {
    let names = identifiers(formula);
    let result = valuations(&names).all(|v| evaluate(formula, &v));
    result
}

/// Does every valuation satisfying all of `hypotheses` satisfy `conclusion`?
pub fn is_consequence(hypotheses: &[Formula], conclusion: &Formula) -> bool {
    let mut names: Vec<String> = Vec::new();
    for hypothesis in hypotheses {
        names.extend(identifiers(hypothesis));
    }
    names.extend(identifiers(conclusion));
    names.sort();
    names.dedup();

    let result = valuations(&names).all(|v| {
        hypotheses.iter().any(|h| !evaluate(h, &v)) || evaluate(conclusion, &v)
    });
    result
}

/// All valuations of `names`, first row all-true, with the last identifier
/// alternating fastest.
fn valuations<'a>(names: &'a [String]) -> impl Iterator<Item = Valuation> + 'a {
    let count = names.len() as u32;
    debug_assert!(count < 31, "truth table would need 2^{} rows", count);
    let rows = 1u32 << count;

    (0..rows).map(move |row| {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let bit = count - 1 - i as u32;
                (name.clone(), (row >> bit) & 1 == 0)
            })
            .collect()
    })
}

/// Render the full truth table of `formula`: one right-aligned column per
/// identifier, then the formula's value.
pub fn write_truth_table<W: Write>(formula: &Formula, w: &mut W) -> io::Result<()> {
    let names = identifiers(formula);

    for name in &names {
        write!(w, "{:>5} ", name)?;
    }
    writeln!(w, "\t{}", formula)?;

    for valuation in valuations(&names) {
        for name in &names {
            write!(w, "{:>5} ", valuation[name])?;
        }
        writeln!(w, "\t{}", evaluate(formula, &valuation))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use crate::parser::parse;

    fn valuation(pairs: &[(&str, bool)]) -> Valuation {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn identifiers_are_sorted_and_unique() {
        let f = parse("q & p | ~q > p_2").unwrap();
        check!(identifiers(&f) == vec!["p".to_string(), "p_2".to_string(), "q".to_string()]);
    }

    #[test]
    fn connective_semantics() {
        let tt = valuation(&[("p", true), ("q", true)]);
        let tf = valuation(&[("p", true), ("q", false)]);
        let ft = valuation(&[("p", false), ("q", true)]);
        let ff = valuation(&[("p", false), ("q", false)]);

        let and = parse("p & q").unwrap();
        check!(evaluate(&and, &tt));
        check!(!evaluate(&and, &tf));

        let or = parse("p | q").unwrap();
        check!(evaluate(&or, &ft));
        check!(!evaluate(&or, &ff));

        let implies = parse("p > q").unwrap();
        check!(evaluate(&implies, &tt));
        check!(!evaluate(&implies, &tf));
        check!(evaluate(&implies, &ft));
        check!(evaluate(&implies, &ff));

        let equiv = parse("p = q").unwrap();
        check!(evaluate(&equiv, &tt));
        check!(!evaluate(&equiv, &tf));
        check!(!evaluate(&equiv, &ft));
        check!(evaluate(&equiv, &ff));

        let not = parse("~p").unwrap();
        check!(!evaluate(&not, &tt));
        check!(evaluate(&not, &ff));
    }

    #[test]
    fn unbound_identifiers_evaluate_false() {
        let f = parse("p | q").unwrap();
        check!(!evaluate(&f, &valuation(&[])));
    }

    #[test]
    fn tautology_by_enumeration() {
        check!(is_tautology(&parse("p | ~p").unwrap()));
        check!(!is_tautology(&parse("p & ~p").unwrap()));
        check!(!is_tautology(&parse("p").unwrap()));
    }

    #[test]
    fn consequence_by_enumeration() {
        let hypotheses = vec![parse("p > q").unwrap(), parse("q > r").unwrap()];
        check!(is_consequence(&hypotheses, &parse("p > r").unwrap()));

        let affirming = vec![parse("p > q").unwrap(), parse("q").unwrap()];
        check!(!is_consequence(&affirming, &parse("p").unwrap()));
    }

    #[test]
    fn truth_table_layout() {
        let f = parse("p & q").unwrap();
        let mut out = Vec::new();
        write_truth_table(&f, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        check!(lines.len() == 5);
        check!(lines[0] == "    p     q \tp & q");
        // First row is all-true; the last identifier alternates fastest.
        check!(lines[1] == " true  true \ttrue");
        check!(lines[2] == " true false \tfalse");
        check!(lines[3] == "false  true \tfalse");
        check!(lines[4] == "false false \tfalse");
    }
}
