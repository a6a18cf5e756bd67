//! Memoization of Gröbner bases and root sets.
//!
//! The cache is keyed by the exact input of each computation, so a warm
//! cache returns exactly what a cold computation would. It is safe to
//! share between threads and between solvers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use radix_poly::{DensePoly, SparsePoly};
use radix_rings::{Algebraic, NumberField};
use radix_roots::RootSet;
use rustc_hash::FxHashMap;

type Basis = Vec<SparsePoly<Algebraic>>;

#[derive(Clone, PartialEq, Eq, Hash)]
struct RootKey {
    poly: DensePoly<Algebraic>,
    field: NumberField,
    divisor_limit: u64,
}

/// Shared memo table for the solver's expensive steps.
#[derive(Default)]
pub struct SolveCache {
    bases: RwLock<FxHashMap<Basis, Arc<Basis>>>,
    roots: RwLock<FxHashMap<RootKey, Arc<RootSet>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Counters reported by [`SolveCache::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to compute.
    pub misses: usize,
    /// Stored Gröbner bases.
    pub bases: usize,
    /// Stored root sets.
    pub root_sets: usize,
}

impl SolveCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The basis of `polys`, computed by `compute` on a miss.
    pub fn groebner_basis(
        &self,
        polys: &[SparsePoly<Algebraic>],
        compute: impl FnOnce() -> Basis,
    ) -> Arc<Basis> {
        if let Some(basis) = self.bases.read().get(polys) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(basis);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let basis = Arc::new(compute());
        let mut bases = self.bases.write();
        Arc::clone(bases.entry(polys.to_vec()).or_insert(basis))
    }

    /// The roots of `poly` over `field`, computed by `compute` on a miss.
    pub fn roots(
        &self,
        poly: &DensePoly<Algebraic>,
        field: &NumberField,
        divisor_limit: u64,
        compute: impl FnOnce() -> RootSet,
    ) -> Arc<RootSet> {
        let key = RootKey {
            poly: poly.clone(),
            field: field.clone(),
            divisor_limit,
        };
        if let Some(set) = self.roots.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(set);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let set = Arc::new(compute());
        let mut roots = self.roots.write();
        Arc::clone(roots.entry(key).or_insert(set))
    }

    /// Current counters and sizes.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            bases: self.bases.read().len(),
            root_sets: self.roots.read().len(),
        }
    }

    /// Drops every stored entry. Counters are kept.
    pub fn clear(&self) {
        self.bases.write().clear();
        self.roots.write().clear();
    }
}

impl std::fmt::Debug for SolveCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveCache").field("stats", &self.stats()).finish()
    }
}
