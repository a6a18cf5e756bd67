//! Cost functions for expression extraction.
//!
//! After equality saturation, we need to pick the "best" expression
//! from each equivalence class. Cost functions define what "best" means.

use egg::{CostFunction, Id, Language};

use crate::language::RadixLang;

/// A cost function that minimizes AST size, counting radicals twice.
#[derive(Default)]
pub struct AstSizeCost;

impl CostFunction<RadixLang> for AstSizeCost {
    type Cost = usize;

    fn cost<C>(&mut self, enode: &RadixLang, mut costs: C) -> Self::Cost
    where
        C: FnMut(Id) -> Self::Cost,
    {
        let base_cost = match enode {
            RadixLang::Sqrt(_) => 2,
            _ => 1,
        };

        enode.fold(base_cost, |sum, id| sum + costs(id))
    }
}
