//! Buchberger's algorithm with the normal selection strategy.

use std::cmp::Ordering;

use radix_poly::{Monomial, MonomialOrder, SparsePoly};
use radix_rings::Field;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::criteria::{chain_criterion, product_criterion};
use crate::reduce::{normal_form, s_polynomial};

/// Configuration for [`Buchberger`].
#[derive(Clone, Debug)]
pub struct GroebnerConfig {
    /// Monomial order of the basis.
    pub order: MonomialOrder,
    /// Whether the final inter-reduction runs on the rayon pool.
    pub parallel_reduce: bool,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            order: MonomialOrder::Lex,
            parallel_reduce: true,
        }
    }
}

#[derive(Clone, Debug)]
struct CriticalPair {
    i: usize,
    j: usize,
    lcm: Monomial,
}

/// State of one Buchberger run.
pub struct Buchberger<F: Field> {
    basis: Vec<SparsePoly<F>>,
    pairs: Vec<CriticalPair>,
    pending: FxHashSet<(usize, usize)>,
    config: GroebnerConfig,
    num_vars: usize,
    unit: bool,
}

impl<F: Field + Send + Sync> Buchberger<F> {
    /// Prepares a run over `generators`, which must share generator count.
    #[must_use]
    pub fn new(generators: &[SparsePoly<F>], config: GroebnerConfig) -> Self {
        let num_vars = generators.first().map_or(0, SparsePoly::num_vars);
        let mut state = Self {
            basis: Vec::new(),
            pairs: Vec::new(),
            pending: FxHashSet::default(),
            config,
            num_vars,
            unit: false,
        };
        for g in generators {
            let g = g.with_order(state.config.order).monic();
            if !g.is_zero() {
                state.insert(g);
            }
        }
        state
    }

    fn insert(&mut self, g: SparsePoly<F>) {
        if g.is_ground() {
            self.unit = true;
            return;
        }
        let k = self.basis.len();
        let lm_k = g.leading_monomial().cloned().unwrap_or_default();
        for (i, f) in self.basis.iter().enumerate() {
            let Some(lm_i) = f.leading_monomial() else {
                continue;
            };
            if product_criterion(lm_i, &lm_k) {
                continue;
            }
            self.pairs.push(CriticalPair {
                i,
                j: k,
                lcm: lm_i.lcm(&lm_k),
            });
            self.pending.insert((i, k));
        }
        self.basis.push(g);
    }

    /// Removes the pair with the smallest lcm, oldest first on ties.
    fn select(&mut self) -> Option<CriticalPair> {
        let order = self.config.order;
        let best = self
            .pairs
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                order
                    .compare(&a.lcm, &b.lcm)
                    .then_with(|| (a.i, a.j).cmp(&(b.i, b.j)))
            })
            .map(|(idx, _)| idx)?;
        let pair = self.pairs.swap_remove(best);
        self.pending.remove(&(pair.i, pair.j));
        Some(pair)
    }

    /// Runs the algorithm and returns the reduced basis.
    ///
    /// An inconsistent system yields `[1]`; the empty ideal yields `[]`.
    #[must_use]
    pub fn compute(mut self) -> Vec<SparsePoly<F>> {
        let mut reductions = 0usize;
        while !self.unit {
            let Some(pair) = self.select() else {
                break;
            };
            let leading: Vec<Monomial> = self
                .basis
                .iter()
                .filter_map(|g| g.leading_monomial().cloned())
                .collect();
            if chain_criterion(pair.i, pair.j, &pair.lcm, &leading, &self.pending) {
                trace!(i = pair.i, j = pair.j, "pair skipped by chain criterion");
                continue;
            }
            let s = s_polynomial(&self.basis[pair.i], &self.basis[pair.j]);
            let h = normal_form(&s, &self.basis);
            reductions += 1;
            if h.is_zero() {
                continue;
            }
            trace!(i = pair.i, j = pair.j, terms = h.len(), "new basis element");
            self.insert(h.monic());
        }

        if self.unit {
            debug!(reductions, "ideal is the whole ring");
            return vec![SparsePoly::one(self.num_vars, self.config.order)];
        }

        let basis = self.finish();
        debug!(reductions, size = basis.len(), order = %self.config.order, "reduced basis");
        basis
    }

    fn finish(&self) -> Vec<SparsePoly<F>> {
        // Minimal basis: drop elements whose leading monomial is a
        // multiple of another's; the earlier one wins on equality.
        let leading: Vec<&Monomial> = self
            .basis
            .iter()
            .filter_map(SparsePoly::leading_monomial)
            .collect();
        let minimal: Vec<SparsePoly<F>> = self
            .basis
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                !leading.iter().enumerate().any(|(j, lm)| {
                    j != *i && lm.divides(leading[*i]) && (*lm != leading[*i] || j < *i)
                })
            })
            .map(|(_, g)| g.clone())
            .collect();

        let reduce_one = |i: usize| {
            let others: Vec<SparsePoly<F>> = minimal
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, g)| g.clone())
                .collect();
            normal_form(&minimal[i], &others)
        };
        let mut reduced: Vec<SparsePoly<F>> = if self.config.parallel_reduce {
            (0..minimal.len()).into_par_iter().map(reduce_one).collect()
        } else {
            (0..minimal.len()).map(reduce_one).collect()
        };

        let order = self.config.order;
        reduced.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
            (Some(x), Some(y)) => order.compare(y, x),
            _ => Ordering::Equal,
        });
        reduced
    }
}

/// Reduced Gröbner basis of `generators` under `config.order`.
#[must_use]
pub fn groebner_basis<F: Field + Send + Sync>(
    generators: &[SparsePoly<F>],
    config: &GroebnerConfig,
) -> Vec<SparsePoly<F>> {
    Buchberger::new(generators, config.clone()).compute()
}
