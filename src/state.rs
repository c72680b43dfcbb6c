//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the repository as a trait object so handlers never see which
//! backend serves them.

use std::sync::Arc;

use crate::services::repository::FeeRepository;

/// Clone is required by Axum; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn FeeRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(repo: Arc<dyn FeeRepository>) -> Self {
        Self { repo }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::fixture::FixtureRepository;

    /// State over a latency-free fixture repository pinned to 8 April 2025.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let repo = FixtureRepository::new(false)
            .with_clock(|| time::macros::datetime!(2025-04-08 10:30:00 UTC));
        AppState::new(Arc::new(repo))
    }
}
