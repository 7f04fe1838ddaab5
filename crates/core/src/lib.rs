//! Domain logic for the SSP dashboard.
//!
//! Everything in this crate is pure: no I/O, no global state. The API crate
//! owns HTTP and the db crate owns persistence.

pub mod contact;
pub mod dashboard;
pub mod error;
pub mod integration_code;
pub mod property;
pub mod property_wizard;
pub mod types;
pub mod wizard_view;
