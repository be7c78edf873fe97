//! App Root Component
//!
//! Global providers and the screen switch. There is no router: the shell
//! holds a single `Screen` and each game page is torn down when it leaves.

use leptos::*;

use classroom_arcade::Screen;

use crate::components::{Layout, Toast};
use crate::pages::{Dashboard, MemoryPage, TournamentPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let screen = create_memo(move |_| state.screen());

    create_effect(move |_| {
        web_sys::console::log_1(&format!("Screen: {:?}", screen.get()).into());
    });

    view! {
        <Layout>
            {move || match screen.get() {
                Screen::Dashboard => view! { <Dashboard /> }.into_view(),
                Screen::Tournament => view! { <TournamentPage /> }.into_view(),
                Screen::Memory => view! { <MemoryPage /> }.into_view(),
            }}
        </Layout>

        // Toast notifications
        <Toast />
    }
}
