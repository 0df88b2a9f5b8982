//! HR Portal Form Services
//!
//! Library backing the portal's form handling: resolving an employee's
//! display name by identifier, classifying an evaluation score into a
//! rating band, counting leave days over a date range, and toggling the
//! accumulated-days default.
//!
//! ## Architecture
//!
//! All form logic takes explicit values and writes results through a
//! `FieldSink` capability; nothing reaches into a page by element id.
//! The one asynchronous piece is the name lookup:
//! identifier -> HTTP lookup channel -> rendered outcome text.
//!
//! ## Quick Start
//!
//! ```rust
//! use hr_portal::forms::rating::{classify_evaluation, Rating};
//!
//! assert_eq!(classify_evaluation(6.7), Some(Rating::VeryGood));
//! ```
//!
//! Driving the lookup against a running portal server:
//!
//! ```rust,no_run
//! use hr_portal::forms::TextSlot;
//! use hr_portal::lookup::{fetch_and_display, EmployeeNameClient, IdentifierField};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = EmployeeNameClient::for_base("http://127.0.0.1:8080")?;
//! let mut name_slot = TextSlot::new();
//! fetch_and_display(&client, &IdentifierField::rut(), "12.345.678-1", &mut name_slot).await;
//! println!("{}", name_slot.value());
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Pure form computations and the field-sink seam
pub mod forms;

// Asynchronous name lookup and display
pub mod lookup;

// Directory seam behind the name endpoint
pub mod directory;

// Name endpoint server (when enabled)
#[cfg(feature = "server")]
pub mod server;

// Public re-exports
pub use directory::{Employee, EmployeeDirectory, InMemoryDirectory};
pub use error::VacationError;
pub use forms::{FieldSink, Rating, TextSlot};
pub use lookup::{EmployeeNameClient, IdentifierField, LookupChannel};
