//! Toast region plus the signal-backed `Notifier` the page injects into the
//! submit flow.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{Notifier, ToastKind, ToastState};

/// `Notifier` writing into a shared `ToastState` signal. Each toast is
/// dismissed after `TOAST_DISMISS_MS` unless a newer one replaced it.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, text: &str) {
        let seq = self.toasts.try_update(|t| t.push(kind, text));
        #[cfg(feature = "hydrate")]
        {
            if let Some(seq) = seq {
                let toasts = self.toasts;
                gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DISMISS_MS, move || {
                    toasts.try_update(|t| t.dismiss(seq));
                })
                .forget();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    }
}

/// Renders the current toast, if any.
#[component]
pub fn Toasts(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div class="toast-region" aria-live="polite">
            {move || {
                toasts
                    .with(|t| t.current.clone())
                    .map(|toast| {
                        let class = toast.css_class();
                        view! {
                            <div class=class role="status">
                                {toast.text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
