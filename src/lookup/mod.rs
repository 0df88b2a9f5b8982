//! Employee name Lookup-and-Display
//!
//! Resolves a user-supplied identifier to a display name over HTTP and
//! renders one of four textual outcomes into the adjacent field:
//!
//! ```text
//! identifier field value
//!         │
//!         ▼
//! fetch_and_display()
//!         │
//!         ├─ empty ──────────────────► "Enter RUT to fetch name"
//!         │
//!         └─ GET /get_employee_name/{identifier}
//!                 │
//!                 ├─ 2xx ────────────► "Employee name: <body>"
//!                 ├─ non-2xx ────────► "Employee name: Does not exist"
//!                 └─ transport error ► "Error fetching employee name."
//! ```
//!
//! The routine suspends at the network call and performs exactly one sink
//! write once the response settles. There is no retry, cancellation, or
//! de-duplication; one invocation maps to at most one request.

pub mod client;
pub mod display;

use anyhow::Result;
use async_trait::async_trait;

pub use client::EmployeeNameClient;
pub use display::{fetch_and_display, IdentifierField};

/// The lookup channel behind the display routine.
///
/// `Ok(Some(name))` is a hit, `Ok(None)` the completed-but-negative
/// outcome (the endpoint answered, no such employee), and `Err` a
/// transport failure that never produced an answer.
#[async_trait]
pub trait LookupChannel: Send + Sync {
    async fn fetch_name(&self, identifier: &str) -> Result<Option<String>>;
}
