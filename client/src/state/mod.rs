//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each context is a plain struct held in an `RwSignal` and provided from the
//! app root, with an explicit `restore` step that reads persisted storage
//! once the page is running in the browser.

pub mod auth;
pub mod settings;
pub mod theme;
