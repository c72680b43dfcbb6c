//! Role-specific navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portal::model::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const STUDENT_NAV: [NavItem; 4] = [
    NavItem { path: "/student/dashboard", label: "Dashboard" },
    NavItem { path: "/student/payment-history", label: "Payment History" },
    NavItem { path: "/student/pending-payments", label: "Pending Payments" },
    NavItem { path: "/student/profile", label: "My Profile" },
];

const ADMIN_NAV: [NavItem; 6] = [
    NavItem { path: "/admin/dashboard", label: "Dashboard" },
    NavItem { path: "/admin/students", label: "Students" },
    NavItem { path: "/admin/payment-tracking", label: "Payment Tracking" },
    NavItem { path: "/admin/fees-management", label: "Fees Management" },
    NavItem { path: "/admin/reports", label: "Reports & Analytics" },
    NavItem { path: "/admin/settings", label: "Settings" },
];

#[must_use]
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => &STUDENT_NAV,
        Role::Admin => &ADMIN_NAV,
    }
}

/// Dashboards are also active on their bare section path (`/admin`).
#[must_use]
pub fn is_active(item_path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    if current == item_path {
        return true;
    }
    item_path.strip_suffix("/dashboard").is_some_and(|section| section == current)
}

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let location = use_location();
    let links = nav_items(role)
        .iter()
        .map(|item| {
            let path = item.path;
            let class = move || {
                if is_active(path, &location.pathname.get()) {
                    "sidebar__link nav-link active"
                } else {
                    "sidebar__link nav-link"
                }
            };
            view! {
                <a href=path class=class>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar__heading small text-uppercase text-muted px-3 pt-3">
                {if role == Role::Admin { "Administration" } else { "Student Menu" }}
            </div>
            <div class="nav flex-column px-2 py-2">{links}</div>
        </nav>
    }
}
