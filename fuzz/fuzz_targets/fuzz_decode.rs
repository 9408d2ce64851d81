#![no_main]

use arbitrary::Arbitrary;
use genexpr::gp::{Genotype, decode, evaluate, fitness};
use libfuzzer_sys::fuzz_target;

/// Structured input for pipeline fuzzing.
#[derive(Arbitrary, Debug)]
struct PipelineInput {
    /// Raw codes, masked to 4 bits.
    codes: Vec<u8>,
    /// Target value; non-finite targets are skipped.
    target: f64,
}

fuzz_target!(|input: PipelineInput| {
    let codes: Vec<u8> = input.codes.iter().take(256).map(|c| c & 0xF).collect();
    let Ok(genotype) = Genotype::new(codes) else {
        panic!("masked codes must be accepted");
    };

    let tokens = decode(&genotype);
    for pair in tokens.tokens().windows(2) {
        assert_ne!(pair[0].is_digit(), pair[1].is_digit(), "tokens must alternate");
    }
    if let Some(last) = tokens.tokens().last() {
        assert!(last.is_digit(), "sequence must end on a digit");
    }

    let value = evaluate(&tokens);
    if input.target.is_finite() {
        let score = fitness(value, input.target);
        assert!(score >= 0.0, "fitness must not be negative: {score}");
    }
});
