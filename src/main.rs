use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use colored::Colorize;
use structopt::StructOpt;

use libprop_tableaux::error::Error;
use libprop_tableaux::formula::Formula;
use libprop_tableaux::tableaux::{Tableau, Verdict};
use libprop_tableaux::{logger, parser, semantics};

/// Decide whether a propositional formula is a tautology, or whether the
/// last of several formulas is a logical consequence of the ones before
/// it, by the method of signed analytic tableaux.
#[derive(Debug, StructOpt)]
#[structopt(name = "prop-tableaux")]
struct Opts {
    /// Write a Graphviz dot rendering of the finished tableau to this
    /// file, truncating it if it exists.
    #[structopt(short = "g", long = "graph", value_name = "PATH")]
    graph: Option<PathBuf>,

    /// Also print the truth table of every input formula.
    #[structopt(short = "t", long = "truth-table")]
    truth_table: bool,

    /// Narrate the proof search on the log.
    #[structopt(short = "d", long = "debug")]
    debug: bool,

    /// Hypotheses followed by the formula to decide; a single formula is
    /// checked for tautology.
    #[structopt(name = "FORMULA", required = true)]
    formulas: Vec<String>,
}

#[paw::main]
fn main(opts: Opts) {
    logger::setup(opts.debug);

    if let Err(error) = run(&opts) {
        eprintln!("{}", error.to_string().red());
        process::exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), Error> {
    let trees = opts
        .formulas
        .iter()
        .map(|text| parser::parse(text))
        .collect::<Result<Vec<Formula>, Error>>()?;

    let (conclusion, hypotheses) = match trees.split_last() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut tableau = if hypotheses.is_empty() {
        Tableau::for_formula(conclusion)?
    } else {
        Tableau::for_consequence(hypotheses, conclusion)
    };
    let verdict = tableau.prove()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "/*")?;

    if opts.truth_table {
        for tree in &trees {
            semantics::write_truth_table(tree, &mut out)?;
            writeln!(out)?;
        }
    }

    tableau.write_trace(&mut out)?;
    writeln!(out)?;
    writeln!(out, "{}", colorize(verdict, verdict_line(&trees, verdict)))?;
    writeln!(out, " */")?;
    out.flush()?;

    if let Some(path) = &opts.graph {
        let mut file = File::create(path)?;
        tableau.write_dot(&mut file)?;
    }

    Ok(())
}

/// The stable verdict sentence for this invocation.
fn verdict_line(trees: &[Formula], verdict: Verdict) -> String {
    if trees.len() == 1 {
        match verdict {
            Verdict::Closed => "Formula is a tautology".to_string(),
            Verdict::Open => "Formula is not a tautology".to_string(),
        }
    } else {
        let conclusion = &trees[trees.len() - 1];
        match verdict {
            Verdict::Closed => format!("{} is a logical consequence of hypotheses", conclusion),
            Verdict::Open => format!("{} is not a logical consequence of hypotheses", conclusion),
        }
    }
}

fn colorize(verdict: Verdict, line: String) -> colored::ColoredString {
    match verdict {
        Verdict::Closed => line.green(),
        Verdict::Open => line.yellow(),
    }
}
