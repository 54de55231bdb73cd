//! Cart selectors
//!
//! Memoized derived values over [`CartState`]. Each selector declares its
//! direct inputs and recomputes only when those inputs change by value;
//! changes anywhere else in the application state leave the cached results
//! untouched.

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

use crate::{
    cart::{CartState, LineItem, LineItems, ProductId},
    memo::Memo,
};

/// Tax rate applied to the cart total (10%).
fn tax_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// Round to two decimal places, midpoint away from zero.
fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The memoized selector chain over a cart.
///
/// Dependency graph: `item_count` and the per-id lookup read `items`; `tax`
/// reads `total_amount` only; `grand_total` reads `total_amount` and `tax`.
/// Computation counts are exposed so the memoization property is directly
/// assertable.
#[derive(Debug, Default)]
pub struct CartSelectors {
    item_count: Memo<LineItems, u64>,
    tax: Memo<Decimal, Decimal>,
    grand_total: Memo<(Decimal, Decimal), Decimal>,
    item_by_id: FxHashMap<ProductId, Memo<LineItems, Option<LineItem>>>,
}

impl CartSelectors {
    /// Create a selector chain with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of units across all lines. Input: `items`.
    pub fn item_count(&mut self, cart: &CartState) -> u64 {
        self.item_count
            .get_or_compute(cart.items_inner(), |items| {
                items.iter().map(|item| item.quantity).sum()
            })
    }

    /// 10% tax on the cart total, rounded to two decimal places.
    ///
    /// Input: `total_amount` only. Item churn that leaves the total equal
    /// does not recompute, nor does any change outside the cart.
    pub fn tax(&mut self, cart: &CartState) -> Decimal {
        self.tax
            .get_or_compute(&cart.total_amount(), |total| {
                round_currency(*total * tax_rate())
            })
    }

    /// Cart total plus tax, rounded to two decimal places.
    ///
    /// Inputs: `total_amount` and the derived `tax`.
    pub fn grand_total(&mut self, cart: &CartState) -> Decimal {
        let tax = self.tax(cart);

        self.grand_total
            .get_or_compute(&(cart.total_amount(), tax), |(total, tax)| {
                round_currency(*total + *tax)
            })
    }

    /// The line item for `id`, if present. Parameterized per call: each id
    /// keeps its own cache keyed by `items`.
    ///
    /// The per-id cache is unbounded by design: it holds one entry per
    /// distinct id ever queried and is never pruned, ids being a small,
    /// caller-controlled set.
    pub fn item_by_id(&mut self, cart: &CartState, id: ProductId) -> Option<LineItem> {
        self.item_by_id
            .entry(id)
            .or_default()
            .get_or_compute(cart.items_inner(), |items| {
                items.iter().find(|item| item.id == id).cloned()
            })
    }

    /// Number of times the item-count selector has recomputed.
    pub fn item_count_computations(&self) -> u64 {
        self.item_count.computations()
    }

    /// Number of times the tax selector has recomputed.
    pub fn tax_computations(&self) -> u64 {
        self.tax.computations()
    }

    /// Number of times the grand-total selector has recomputed.
    pub fn grand_total_computations(&self) -> u64 {
        self.grand_total.computations()
    }
}
