//! Shared models and pure state transitions for the customer priority dashboard.
//!
//! Everything in this crate is free of DOM and network access so the same
//! rules run in the browser (`frontend`), on the host (`backend`) and in
//! native tests.

pub mod csv_header;
pub mod error;
pub mod model;
pub mod requests;
pub mod routes;
pub mod validation;
