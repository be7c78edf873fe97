//! Toast Notification Component
//!
//! Validation errors ("need at least two images") and short confirmations.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastVariant::Success => ("✓", "border-green-400 text-green-200 shadow-[0_0_14px_#4ade80]"),
            ToastVariant::Error => ("✕", "border-pink-400 text-pink-200 shadow-[0_0_14px_#f472b6]"),
        }
    }
}

/// Toast container, bottom right. Click a toast to dismiss it early.
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        variant=ToastVariant::Success
                        on_dismiss=move |_| state.success.set(None)
                    />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        variant=ToastVariant::Error
                        on_dismiss=move |_| state.clear_error()
                    />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)] message: String,
    variant: ToastVariant,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let (icon, tone) = variant.style();

    view! {
        <div
            class=format!(
                "flex items-center space-x-3 bg-slate-900/95 border-2 {} px-4 py-3 rounded-xl \
                 cursor-pointer animate-slide-in",
                tone
            )
            on:click=move |_| on_dismiss.call(())
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
