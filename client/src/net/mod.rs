//! Network layer: typed helpers over the server's JSON API.

pub mod api;
