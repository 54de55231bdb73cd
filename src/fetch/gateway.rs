//! Fetch gateway
//!
//! The external collaborator that performs the actual lookup, and the
//! driving operation that runs one fetch through the machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::machine::FetchMachine;

/// Fallback failure message when the gateway error renders empty.
pub const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching user data";

/// Identifier of a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

/// Errors a gateway implementation may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The remote endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// Status code reported by the endpoint.
        status: u16,
    },

    /// The transport failed before any response arrived.
    #[error("{0}")]
    Transport(String),
}

/// Asynchronous lookup of a payload by id.
///
/// Implementations live outside the core: HTTP clients, test stubs. The
/// call must settle exactly once; the core enforces no timeout, so a call
/// that never settles leaves the machine loading indefinitely.
pub trait FetchGateway {
    /// Payload produced on success.
    type Payload: Clone;

    /// Error produced on failure. Its `Display` text becomes the failure
    /// message stored in the state.
    type Error: fmt::Display;

    /// Fetch the payload for `id`.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error when the remote endpoint reports
    /// a non-success status or the transport fails.
    async fn fetch_by_id(&self, id: ResourceId) -> Result<Self::Payload, Self::Error>;
}

/// Run one fetch through the machine: issue `Init`, await the gateway,
/// then issue `Success` or `Failure`.
///
/// There is no cancellation. A superseding call against the same machine
/// re-issues `Init` (rejected as a no-op while loading) and does not abort
/// the earlier request; whichever response settles last overwrites the
/// state.
pub async fn run_fetch<G: FetchGateway>(
    machine: &mut FetchMachine<G::Payload>,
    gateway: &G,
    id: ResourceId,
) {
    machine.init();

    match gateway.fetch_by_id(id).await {
        Ok(payload) => machine.report_success(payload),
        Err(error) => {
            let message = error.to_string();

            if message.is_empty() {
                machine.report_failure(GENERIC_FETCH_ERROR);
            } else {
                machine.report_failure(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fetch::FetchStatus;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
    }

    /// Gateway that answers every lookup with a fixed result.
    struct StaticGateway {
        result: Result<User, GatewayError>,
    }

    impl FetchGateway for StaticGateway {
        type Payload = User;
        type Error = GatewayError;

        async fn fetch_by_id(&self, _id: ResourceId) -> Result<User, GatewayError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn successful_fetch_resolves_with_payload() {
        let gateway = StaticGateway {
            result: Ok(User {
                name: "Alice".to_owned(),
            }),
        };
        let mut machine = FetchMachine::new();

        run_fetch(&mut machine, &gateway, ResourceId(1)).await;

        assert_eq!(machine.status(), FetchStatus::Resolved, "fetch resolves");
        assert_eq!(
            machine.data().map(|user| user.name.as_str()),
            Some("Alice"),
            "payload stored"
        );
        assert_eq!(machine.error(), None, "no error on success");
    }

    #[tokio::test]
    async fn http_failure_stores_the_status_message() {
        let gateway = StaticGateway {
            result: Err(GatewayError::Http { status: 404 }),
        };
        let mut machine = FetchMachine::new();

        run_fetch(&mut machine, &gateway, ResourceId(1)).await;

        assert_eq!(machine.status(), FetchStatus::Rejected, "fetch rejects");
        assert_eq!(
            machine.error(),
            Some("HTTP error! status: 404"),
            "message carries the status code"
        );
        assert_eq!(machine.data(), None, "no data on failure");
    }

    #[tokio::test]
    async fn empty_error_message_falls_back_to_the_generic_one() {
        let gateway = StaticGateway {
            result: Err(GatewayError::Transport(String::new())),
        };
        let mut machine = FetchMachine::new();

        run_fetch(&mut machine, &gateway, ResourceId(1)).await;

        assert_eq!(
            machine.error(),
            Some(GENERIC_FETCH_ERROR),
            "empty message replaced by the generic fallback"
        );
    }

    #[tokio::test]
    async fn retry_after_failure_clears_the_error() {
        let failing = StaticGateway {
            result: Err(GatewayError::Http { status: 500 }),
        };
        let succeeding = StaticGateway {
            result: Ok(User {
                name: "Alice".to_owned(),
            }),
        };
        let mut machine = FetchMachine::new();

        run_fetch(&mut machine, &failing, ResourceId(1)).await;
        assert!(machine.is_rejected(), "first attempt fails");

        run_fetch(&mut machine, &succeeding, ResourceId(1)).await;
        assert!(machine.is_resolved(), "retry resolves");
        assert_eq!(machine.error(), None, "retry cleared the error");
    }
}
