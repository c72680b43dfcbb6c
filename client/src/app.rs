//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::{AdminLayout, StudentLayout};
use crate::pages::admin::{
    dashboard::AdminDashboardPage, fees_management::FeesManagementPage, payment_tracking::PaymentTrackingPage,
    reports::ReportsPage, settings::SettingsPage, students::StudentListPage,
};
use crate::pages::auth::{ForgotPasswordPage, LoginPage, ResetPasswordPage};
use crate::pages::errors::{NotFoundPage, UnauthorizedPage};
use crate::pages::home::HomePage;
use crate::pages::student::{
    dashboard::StudentDashboardPage, make_payment::MakePaymentPage, payment_history::PaymentHistoryPage,
    pending_payments::PendingPaymentsPage, profile::ProfilePage, receipt::ReceiptPage,
};
use crate::state::auth::AuthState;
use crate::state::settings::PortalSettings;
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-bs-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, theme, and settings contexts and sets up client-side
/// routing. Persisted state is restored once mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let theme = RwSignal::new(ThemeState::default());
    let settings = RwSignal::new(PortalSettings::default());

    provide_context(auth);
    provide_context(theme);
    provide_context(settings);

    // Effects only run in the browser; settings first so tables created by
    // the guarded pages see the saved page size.
    Effect::new(move || {
        settings.set(PortalSettings::restore());
        theme.set(ThemeState::restore());
        auth.set(AuthState::restore());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/feeportal.css"/>
        <Title text="SVIT Fee Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <ParentRoute path=StaticSegment("student") view=StudentLayout>
                    <Route path=StaticSegment("") view=StudentDashboardPage/>
                    <Route path=StaticSegment("dashboard") view=StudentDashboardPage/>
                    <Route path=StaticSegment("payment-history") view=PaymentHistoryPage/>
                    <Route path=StaticSegment("pending-payments") view=PendingPaymentsPage/>
                    <Route path=(StaticSegment("make-payment"), ParamSegment("fee_id")) view=MakePaymentPage/>
                    <Route path=(StaticSegment("receipt"), ParamSegment("id")) view=ReceiptPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    <Route path=StaticSegment("students") view=StudentListPage/>
                    <Route path=StaticSegment("payment-tracking") view=PaymentTrackingPage/>
                    <Route path=StaticSegment("fees-management") view=FeesManagementPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
