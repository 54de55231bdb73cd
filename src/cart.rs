//! Cart
//!
//! Normalized line-item state and the pure reducer over it. Line items are
//! unique by product id and kept in insertion order; the cached total is
//! recomputed eagerly on every mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub mod selectors;

/// Identifier of a product, assigned by the catalogue (out of scope here).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProductId(pub u64);

/// A product as offered by the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price. Expected to be non-negative.
    pub unit_price: Decimal,

    /// Reference to the product image, resolved by the caller.
    pub image: String,
}

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier this line refers to.
    pub id: ProductId,

    /// Display name, copied from the product at add time.
    pub name: String,

    /// Unit price, copied from the product at add time.
    pub unit_price: Decimal,

    /// Image reference, copied from the product at add time.
    pub image: String,

    /// Number of units. Always positive; a line that would reach zero is
    /// deleted instead.
    pub quantity: u64,
}

impl LineItem {
    fn from_product(product: Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            image: product.image,
            quantity: 1,
        }
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Inline-capacity list of line items.
pub(crate) type LineItems = SmallVec<[LineItem; 8]>;

/// Cart state: ordered line items, unique by product id, plus the eagerly
/// maintained total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: LineItems,
    total_amount: Decimal,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Cached sum of `unit_price × quantity` over all items.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items_inner(&self) -> &LineItems {
        &self.items
    }
}

/// Commands accepted by the cart reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add one unit of the product, appending a new line if absent.
    Add(Product),

    /// Remove one unit, deleting the line when its quantity reaches zero.
    Remove(ProductId),

    /// Set a line's quantity directly; non-positive values delete the line.
    SetQuantity {
        /// Product to update.
        id: ProductId,

        /// New quantity. Values `<= 0` delete the line.
        quantity: i64,
    },

    /// Empty the cart.
    Clear,
}

/// Apply a command to the cart, returning the new state.
///
/// Total over every `(state, command)` pair: unknown ids are no-ops and
/// non-positive quantities delete the line, never an error.
pub fn reduce(state: &CartState, command: CartCommand) -> CartState {
    let mut items = state.items.clone();

    match command {
        CartCommand::Add(product) => {
            if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
                existing.quantity += 1;
            } else {
                items.push(LineItem::from_product(product));
            }
        }
        CartCommand::Remove(id) => {
            if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
                if existing.quantity > 1 {
                    existing.quantity -= 1;
                } else {
                    items.retain(|item| item.id != id);
                }
            }
        }
        CartCommand::SetQuantity { id, quantity } => match u64::try_from(quantity) {
            Ok(quantity) if quantity > 0 => {
                if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
                    existing.quantity = quantity;
                }
            }
            _ => items.retain(|item| item.id != id),
        },
        CartCommand::Clear => items.clear(),
    }

    let total_amount = total_of(&items);

    CartState {
        items,
        total_amount,
    }
}

/// Sum of `unit_price × quantity` over the given items.
fn total_of(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}
