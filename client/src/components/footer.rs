//! Portal footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = crate::util::clock::today().year();
    view! {
        <footer class="portal-footer text-center text-muted small py-3">
            {format!("© {year} SVIT College, Andhra Pradesh. All rights reserved.")}
        </footer>
    }
}
