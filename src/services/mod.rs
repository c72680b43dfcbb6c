//! Data services behind the JSON API.
//!
//! ARCHITECTURE
//! ============
//! Route handlers talk to a [`repository::FeeRepository`] trait object and
//! never to fixture data directly, so a database-backed implementation can
//! replace [`fixture::FixtureRepository`] without touching the routes.

pub mod fixture;
pub mod repository;
