//! Reusable UI building blocks shared by the pages.

pub mod alert;
pub mod badge;
pub mod card;
pub mod data_table;
pub mod field;
pub mod footer;
pub mod layout;
pub mod loader;
pub mod navbar;
pub mod pagination;
pub mod sidebar;
