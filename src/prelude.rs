//! Cartwheel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartCommand, CartState, LineItem, Product, ProductId, selectors::CartSelectors},
    fetch::{
        FetchCommand, FetchState, FetchStatus,
        gateway::{FetchGateway, GatewayError, ResourceId, run_fetch},
        machine::FetchMachine,
        observer::{NoopObserver, RecordingObserver, TransitionObserver},
    },
    memo::Memo,
    store::{Action, Store},
    theme::{ThemeCommand, ThemeMode, ThemeState},
};
