//! Cartwheel
//!
//! Cartwheel is a client-side state core: a validated finite-state-machine
//! reducer for asynchronous data fetches, and a normalized shopping-cart
//! model with a memoized derived-value chain. The UI and network layers are
//! external collaborators; this crate owns only the state transitions.

pub mod cart;
pub mod fetch;
pub mod memo;
pub mod prelude;
pub mod store;
pub mod theme;
