//! Signed-in shells for the student and admin sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section is a parent route whose layout installs the role guard and
//! renders navbar, sidebar, and the matched child page. Nothing below the
//! guard renders until access is granted.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;
use portal::model::Role;

use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::guard::{Access, access, install_role_redirect};

fn section(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_redirect(auth, role, use_navigate());

    view! {
        <Show
            when=move || auth.with(|a| access(a, role) == Access::Granted)
            fallback=|| view! { <Loader/> }
        >
            <div class="portal-layout">
                <Navbar/>
                <div class="portal-layout__body d-flex">
                    <Sidebar role=role/>
                    <main class="portal-layout__main flex-grow-1 p-4">
                        <Outlet/>
                    </main>
                </div>
                <Footer/>
            </div>
        </Show>
    }
}

#[component]
pub fn StudentLayout() -> impl IntoView {
    section(Role::Student)
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    section(Role::Admin)
}
