pub mod admin;
pub mod auth;
pub mod errors;
pub mod home;
pub mod student;
