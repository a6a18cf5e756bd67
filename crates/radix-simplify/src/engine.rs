//! The main simplification engine.
//!
//! This module provides the high-level API for simplifying expressions
//! using equality saturation.

use egg::{CostFunction, Extractor, RecExpr, Rewrite, Runner};
use tracing::debug;

use crate::analysis::ConstantFold;
use crate::cost::AstSizeCost;
use crate::language::RadixLang;
use crate::parse::{parse_expr, ParseError};
use crate::print::to_infix;
use crate::rules;

/// Configuration for the simplification engine.
#[derive(Clone, Debug)]
pub struct SimplifierConfig {
    /// Maximum number of iterations.
    pub iter_limit: usize,
    /// Maximum number of nodes in the e-graph.
    pub node_limit: usize,
    /// Time limit in seconds.
    pub time_limit_secs: u64,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            iter_limit: 30,
            node_limit: 100_000,
            time_limit_secs: 10,
        }
    }
}

/// The main simplification engine.
#[derive(Clone)]
pub struct Simplifier {
    config: SimplifierConfig,
    rules: Vec<Rewrite<RadixLang, ConstantFold>>,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Simplifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simplifier")
            .field("config", &self.config)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Simplifier {
    /// Creates a new simplifier with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SimplifierConfig::default())
    }

    /// Creates a simplifier with custom configuration.
    #[must_use]
    pub fn with_config(config: SimplifierConfig) -> Self {
        Self {
            config,
            rules: rules::all_rules(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SimplifierConfig {
        &self.config
    }

    fn run(&self, expr: &RecExpr<RadixLang>) -> Runner<RadixLang, ConstantFold> {
        Runner::default()
            .with_expr(expr)
            .with_iter_limit(self.config.iter_limit)
            .with_node_limit(self.config.node_limit)
            .with_time_limit(std::time::Duration::from_secs(self.config.time_limit_secs))
            .run(&self.rules)
    }

    /// Simplifies an infix expression and prints the result in infix form.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be parsed.
    pub fn simplify_str(&self, expr: &str) -> Result<String, ParseError> {
        let parsed = parse_expr(expr)?;
        Ok(to_infix(&self.simplify(&parsed)))
    }

    /// Simplifies a parsed expression.
    #[must_use]
    pub fn simplify(&self, expr: &RecExpr<RadixLang>) -> RecExpr<RadixLang> {
        self.simplify_with_stats(expr).0
    }

    /// Simplifies and returns both the result and statistics.
    ///
    /// The input is returned unchanged unless the extracted expression is
    /// strictly cheaper under [`AstSizeCost`].
    #[must_use]
    pub fn simplify_with_stats(
        &self,
        expr: &RecExpr<RadixLang>,
    ) -> (RecExpr<RadixLang>, SimplificationStats) {
        if expr.as_ref().is_empty() {
            return (expr.clone(), SimplificationStats::default());
        }
        let runner = self.run(expr);

        let stats = SimplificationStats {
            iterations: runner.iterations.len(),
            egraph_nodes: runner.egraph.total_number_of_nodes(),
            egraph_classes: runner.egraph.number_of_classes(),
            stop_reason: format!("{:?}", runner.stop_reason),
        };
        debug!(
            iterations = stats.iterations,
            nodes = stats.egraph_nodes,
            stop = %stats.stop_reason,
            "equality saturation finished"
        );

        let extractor = Extractor::new(&runner.egraph, AstSizeCost);
        let (best_cost, best) = extractor.find_best(runner.roots[0]);
        let input_cost = AstSizeCost.cost_rec(expr);
        if best_cost < input_cost {
            (best, stats)
        } else {
            debug!(cost = input_cost, "no cheaper form found, keeping input");
            (expr.clone(), stats)
        }
    }
}

/// Statistics about the simplification process.
#[derive(Clone, Debug, Default)]
pub struct SimplificationStats {
    /// Number of iterations run.
    pub iterations: usize,
    /// Total nodes in the e-graph.
    pub egraph_nodes: usize,
    /// Number of equivalence classes.
    pub egraph_classes: usize,
    /// Reason the runner stopped.
    pub stop_reason: String,
}
