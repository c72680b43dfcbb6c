//! Admin section pages, rendered inside `AdminLayout`.

pub mod dashboard;
pub mod fees_management;
pub mod payment_tracking;
pub mod reports;
pub mod settings;
pub mod students;
