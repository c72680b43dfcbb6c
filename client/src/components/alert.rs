//! Dismissible page alert.
//!
//! Pages keep one `RwSignal<Option<Notice>>` and set it from fetch results;
//! the alert clears itself after [`AUTO_DISMISS_MS`] unless a newer notice
//! replaced it in the meantime.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

pub const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success alert-dismissible",
            Self::Danger => "alert alert-danger alert-dismissible",
            Self::Warning => "alert alert-warning alert-dismissible",
            Self::Info => "alert alert-info alert-dismissible",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Info, message: message.into() }
    }
}

/// Clear `slot` only if it still holds `shown`.
pub fn dismiss_if_current(slot: &mut Option<Notice>, shown: &Notice) {
    if slot.as_ref() == Some(shown) {
        *slot = None;
    }
}

#[component]
pub fn Alert(notice: RwSignal<Option<Notice>>, #[prop(default = true)] auto_dismiss: bool) -> impl IntoView {
    Effect::new(move || {
        let Some(shown) = notice.get() else {
            return;
        };
        if !auto_dismiss {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            let _ = notice.try_update(|slot| dismiss_if_current(slot, &shown));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = shown;
        }
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.kind.class() role="alert">
                    {n.message}
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| notice.set(None)
                    ></button>
                </div>
            }
        })
    }
}
