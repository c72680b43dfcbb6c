//! Shared domain model for the fee portal.
//!
//! This crate is used by both the `feeportal` server and the `client` UI, so
//! everything here is pure: no I/O, no clock reads, no async. Functions that
//! depend on the current date take it as a parameter.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Records exchanged over the JSON API; each implements [`grid::Row`] |
//! | [`error`] | [`PortalError`], the single failure taxonomy |
//! | [`fixtures`] | Static demo data served by the fixture repository |
//! | [`format`] | Currency, date, and payment-input formatting |
//! | [`validate`] | Form validators that never fail |
//! | [`filter`] | Page-level filters and date-range presets |

pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod model;
pub mod validate;

pub use error::PortalError;
