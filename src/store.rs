//! Store
//!
//! Composes the cart and theme reducers behind a single dispatch and owns
//! the selector caches. Each action is routed to exactly one reducer; the
//! selectors read through to the cart state they derive from.

use rust_decimal::Decimal;

use crate::{
    cart::{self, CartCommand, CartState, LineItem, ProductId, selectors::CartSelectors},
    theme::{self, ThemeCommand, ThemeMode, ThemeState},
};

/// An action routed to one of the store's reducers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cart mutation.
    Cart(CartCommand),

    /// Theme mutation.
    Theme(ThemeCommand),
}

/// Application store: cart and theme state plus memoized selectors.
#[derive(Debug, Default)]
pub struct Store {
    cart: CartState,
    theme: ThemeState,
    selectors: CartSelectors,
}

impl Store {
    /// Create a store with an empty cart and the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an action to the owning reducer.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Cart(command) => self.cart = cart::reduce(&self.cart, command),
            Action::Theme(command) => self.theme = theme::reduce(self.theme, command),
        }
    }

    /// Cart state.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Current theme mode.
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Cached cart total.
    pub fn total_amount(&self) -> Decimal {
        self.cart.total_amount()
    }

    /// Memoized: total units across all lines.
    pub fn item_count(&mut self) -> u64 {
        self.selectors.item_count(&self.cart)
    }

    /// Memoized: 10% tax on the total, two decimal places.
    pub fn tax(&mut self) -> Decimal {
        self.selectors.tax(&self.cart)
    }

    /// Memoized: total plus tax, two decimal places.
    pub fn grand_total(&mut self) -> Decimal {
        self.selectors.grand_total(&self.cart)
    }

    /// Memoized per id: the line item for `id`, if present.
    pub fn item_by_id(&mut self, id: ProductId) -> Option<LineItem> {
        self.selectors.item_by_id(&self.cart, id)
    }

    /// The selector caches; computation counts are readable for tests.
    pub fn selectors(&self) -> &CartSelectors {
        &self.selectors
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::Product;

    use super::*;

    fn product(id: u64, price_minor: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            unit_price: Decimal::new(price_minor, 2),
            image: format!("product-{id}.png"),
        }
    }

    #[test]
    fn actions_route_to_the_owning_reducer() {
        let mut store = Store::new();

        store.dispatch(Action::Cart(CartCommand::Add(product(1, 10000))));
        store.dispatch(Action::Theme(ThemeCommand::Toggle));

        assert_eq!(store.items().len(), 1, "cart action reached the cart");
        assert_eq!(store.theme(), ThemeMode::Light, "theme action reached the theme");
    }

    #[test]
    fn theme_changes_do_not_invalidate_cart_selectors() {
        let mut store = Store::new();
        store.dispatch(Action::Cart(CartCommand::Add(product(1, 10000))));

        let tax = store.tax();
        let grand = store.grand_total();

        store.dispatch(Action::Theme(ThemeCommand::Toggle));
        store.dispatch(Action::Theme(ThemeCommand::Toggle));

        assert_eq!(store.tax(), tax, "tax unchanged by theme churn");
        assert_eq!(store.grand_total(), grand, "grand total unchanged");
        assert_eq!(
            store.selectors().tax_computations(),
            1,
            "theme churn must not recompute tax"
        );
        assert_eq!(
            store.selectors().grand_total_computations(),
            1,
            "theme churn must not recompute grand total"
        );
    }

    #[test]
    fn item_by_id_reads_through_the_store() {
        let mut store = Store::new();
        store.dispatch(Action::Cart(CartCommand::Add(product(7, 500))));

        assert_eq!(
            store.item_by_id(ProductId(7)).map(|item| item.quantity),
            Some(1),
            "line readable by id"
        );
        assert_eq!(store.item_by_id(ProductId(8)), None, "absent id is none");
    }
}
