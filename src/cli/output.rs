//! Output formatting utilities for CLI.

use genexpr::gp::{EvolutionConfig, EvolutionStats, GenerationReport};
use serde::Serialize;

/// Format one generation's line of text output.
pub(super) fn format_generation(report: &GenerationReport) -> String {
    if report.solved {
        format!("Found solution {:.6}", report.best_value)
    } else {
        format!("Best value: {:.6}", report.best_value)
    }
}

/// JSON-serializable run report.
///
/// JSON has no infinity, so `serde_json` writes the infinite fitness of a
/// solved generation as `null`. Consumers should read `solved` rather than
/// compare `best_fitness`.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport<'a> {
    /// Configuration the run used.
    config: &'a EvolutionConfig,
    /// Per-generation reports and outcome.
    #[serde(flatten)]
    stats: &'a EvolutionStats,
}

impl<'a> JsonReport<'a> {
    /// Bundle a configuration with the stats it produced.
    pub(super) fn new(config: &'a EvolutionConfig, stats: &'a EvolutionStats) -> Self {
        Self { config, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genexpr::gp::{Genotype, Outcome, SelectionStats};

    fn report(value: f64, solved: bool) -> GenerationReport {
        GenerationReport {
            generation: 0,
            best_value: value,
            best_fitness: if solved { f64::INFINITY } else { 0.5 },
            best_expression: "6 * 7".to_string(),
            best_genotype: Genotype::new(vec![6, 12, 7]).unwrap(),
            population_size: 1,
            stats: SelectionStats::from_fitness(&[0.5]),
            solved,
        }
    }

    #[test]
    fn test_format_generation() {
        assert_eq!(format_generation(&report(40.0, false)), "Best value: 40.000000");
        assert_eq!(format_generation(&report(42.0, true)), "Found solution 42.000000");
    }

    #[test]
    fn test_json_report_solved_run() {
        let config = EvolutionConfig {
            seed: Some(7),
            ..EvolutionConfig::default()
        };
        let stats = EvolutionStats {
            seed: Some(7),
            generations: vec![report(42.0, true)],
            outcome: Outcome::Solved {
                generation: 0,
                value: 42.0,
                expression: "6 * 7".to_string(),
            },
        };

        let json = serde_json::to_value(JsonReport::new(&config, &stats)).unwrap();

        assert_eq!(json["config"]["seed"], 7);
        assert_eq!(json["seed"], 7);
        assert_eq!(json["outcome"]["kind"], "solved");
        assert_eq!(json["outcome"]["expression"], "6 * 7");
        let generation = &json["generations"][0];
        assert_eq!(generation["solved"], true);
        assert!(generation["best_fitness"].is_null());
        assert_eq!(generation["best_genotype"], serde_json::json!([6, 12, 7]));
    }
}
