//! Inspect command: score one genotype by hand.

use super::CliError;
use genexpr::gp::{Genotype, decode, evaluate, fitness, is_solution};
use std::fmt::Write;

/// Execute the inspect command.
///
/// # Errors
///
/// Returns an error if a code does not fit in 4 bits.
pub(crate) fn execute(codes: Vec<u8>, target: f64) -> Result<(), CliError> {
    print!("{}", describe(codes, target)?);
    Ok(())
}

/// Decode, evaluate and score `codes`, one labelled line per step.
fn describe(codes: Vec<u8>, target: f64) -> Result<String, CliError> {
    let genotype = Genotype::new(codes)?;
    let tokens = decode(&genotype);
    let value = evaluate(&tokens);
    let score = fitness(value, target);

    let mut out = String::new();
    let _ = writeln!(out, "Genotype:   {:?}", genotype.codes());
    let _ = writeln!(out, "Expression: {tokens}");
    let _ = writeln!(out, "Value:      {value:.6}");
    let _ = writeln!(out, "Fitness:    {score}");
    if is_solution(score) {
        let _ = writeln!(out, "Exact match for target {target}");
    }

    Ok(out)
}
