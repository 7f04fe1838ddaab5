//! Request handlers.
//!
//! Handlers validate at the boundary, delegate to the contact store held in
//! [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod contact;
