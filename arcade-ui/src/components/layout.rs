//! Layout Component
//!
//! Page frame with the title bar and the home button.

use leptos::*;

use crate::state::global::GlobalState;

/// Page frame. The home button shows on every screen except the dashboard.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let show_home = move || state.shell.with(|s| s.shows_home_button());

    view! {
        <div class="min-h-screen bg-slate-950 text-white flex flex-col">
            <header class="border-b border-slate-800 bg-slate-900/80">
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between h-16">
                        <span class="flex items-center space-x-3">
                            <span class="text-2xl">"🕹"</span>
                            <span class="text-xl font-bold tracking-wide">"Classroom Arcade"</span>
                        </span>

                        <Show when=show_home>
                            <button
                                class="px-4 py-2 rounded-lg text-slate-300 hover:text-white hover:bg-slate-800 transition-colors"
                                on:click=move |_| state.go_home()
                            >
                                "🏠 Home"
                            </button>
                        </Show>
                    </div>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8">
                {children()}
            </main>
        </div>
    }
}
