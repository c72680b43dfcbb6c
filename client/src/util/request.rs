//! Stale-response guard for page fetches.
//!
//! DESIGN
//! ======
//! Every page owns one [`RequestGeneration`]. Starting a fetch takes a
//! [`Ticket`]; the response is applied only while that ticket is still the
//! newest. Re-fetching or unmounting advances the generation, so a slow
//! response can never overwrite newer state or touch a disposed page.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn next(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Mark every outstanding ticket stale (page unmount).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// A generation owned by the current component; unmounting invalidates it.
pub fn scoped_generation() -> RequestGeneration {
    let generation = RequestGeneration::new();
    let on_unmount = generation.clone();
    leptos::prelude::on_cleanup(move || on_unmount.invalidate());
    generation
}

/// Run `fetch` in the background and hand its output to `apply` if no newer
/// request was started in the meantime. Browser only; a no-op under SSR.
pub fn spawn_guarded<T, Fut, F>(generation: &RequestGeneration, fetch: Fut, apply: F)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    F: FnOnce(T) + 'static,
{
    let ticket = generation.next();
    let generation = generation.clone();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let output = fetch.await;
        if generation.is_current(ticket) {
            apply(output);
        } else {
            log::debug!("discarding stale response");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, generation, fetch, apply);
    }
}
