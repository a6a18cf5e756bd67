//! Solver configuration.

use radix_groebner::GroebnerConfig;
use radix_roots::RootConfig;
use radix_simplify::SimplifierConfig;

/// Options for [`crate::Solver`].
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Run the simplifier over the values of linear solutions.
    pub simplify: bool,
    /// Gröbner basis settings. The order is always forced to lex.
    pub groebner: GroebnerConfig,
    /// Root finder settings.
    pub roots: RootConfig,
    /// Simplifier settings, used when `simplify` is set.
    pub simplifier: SimplifierConfig,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            simplify: true,
            groebner: GroebnerConfig::default(),
            roots: RootConfig::default(),
            simplifier: SimplifierConfig::default(),
        }
    }
}

impl SolveOptions {
    /// Options with simplification switched on or off.
    #[must_use]
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }
}
