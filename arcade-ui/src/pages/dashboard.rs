//! Dashboard Page
//!
//! Game select: a grid on wide screens, a three-slot carousel on phones.

use leptos::*;

use classroom_arcade::{catalog, Accent, Carousel, GameEntry, Slot, SlotAction};

use crate::state::global::GlobalState;

fn accent_classes(entry: &GameEntry) -> &'static str {
    match entry.accent {
        Accent::Cyan => "border-cyan-400 shadow-[0_0_18px_#22d3ee]",
        Accent::Green => "border-green-400 shadow-[0_0_18px_#4ade80]",
        Accent::Slate => "border-slate-600",
    }
}

fn slot_classes(slot: Slot) -> &'static str {
    match slot {
        Slot::Active => "translate-x-0 scale-100 opacity-100 z-20",
        Slot::Prev => "-translate-x-3/4 scale-75 opacity-50 z-10",
        Slot::Next => "translate-x-3/4 scale-75 opacity-50 z-10",
        Slot::Hidden => "scale-50 opacity-0 pointer-events-none",
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold tracking-wide">"Choose a Game"</h1>
                <p class="text-slate-400 mt-2">"Pick something to play with the class"</p>
            </div>

            // Desktop grid
            <section class="hidden md:grid grid-cols-3 gap-6">
                {catalog()
                    .iter()
                    .map(|entry| view! { <GameTile entry=entry /> })
                    .collect_view()}
            </section>

            // Mobile carousel
            <section class="md:hidden">
                <MobileCarousel />
            </section>
        </div>
    }
}

#[component]
fn GameTile(entry: &'static GameEntry) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            class=format!(
                "w-full text-left rounded-2xl border-2 bg-slate-900 p-6 transition-transform \
                 hover:-translate-y-1 disabled:hover:translate-y-0 disabled:cursor-not-allowed {}",
                accent_classes(entry)
            )
            disabled=entry.disabled
            on:click=move |_| state.open_game(entry)
        >
            <GameTileBody entry=entry />
        </button>
    }
}

#[component]
fn GameTileBody(entry: &'static GameEntry) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-bold">{entry.title}</h2>
        <p class="text-slate-400 mt-2">{entry.description}</p>
        {entry.disabled.then(|| view! {
            <span class="inline-block mt-4 text-xs uppercase tracking-widest text-slate-500">
                "Locked"
            </span>
        })}
    }
}

#[component]
fn MobileCarousel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let carousel = create_rw_signal(Carousel::for_catalog());

    let on_slot = move |index: usize, entry: &'static GameEntry| {
        match carousel.with(|c| c.click(index)) {
            SlotAction::Select => state.open_game(entry),
            SlotAction::MovePrev => carousel.update(|c| c.prev()),
            SlotAction::MoveNext => carousel.update(|c| c.next()),
            SlotAction::None => {}
        }
    };

    view! {
        <div class="relative h-72 flex items-center justify-center overflow-hidden">
            {catalog()
                .iter()
                .enumerate()
                .map(|(index, entry)| view! {
                    <div
                        class=move || format!(
                            "absolute w-64 rounded-2xl border-2 bg-slate-900 p-6 transition-all duration-300 {} {}",
                            accent_classes(entry),
                            slot_classes(carousel.with(|c| c.slot(index)))
                        )
                        on:click=move |_| on_slot(index, entry)
                    >
                        <GameTileBody entry=entry />
                    </div>
                })
                .collect_view()}
        </div>

        <div class="flex items-center justify-center space-x-6 mt-4">
            <button class="text-3xl text-slate-400" on:click=move |_| carousel.update(|c| c.prev())>
                "‹"
            </button>
            {move || {
                let current = carousel.with(|c| c.current());
                catalog()
                    .iter()
                    .enumerate()
                    .map(|(i, _)| {
                        let dot = if i == current { "bg-cyan-400" } else { "bg-slate-600" };
                        view! { <span class=format!("w-2 h-2 rounded-full {}", dot) /> }
                    })
                    .collect_view()
            }}
            <button class="text-3xl text-slate-400" on:click=move |_| carousel.update(|c| c.next())>
                "›"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_entry_has_no_glow() {
        let locked = catalog().iter().find(|e| e.disabled).unwrap();
        assert!(!accent_classes(locked).contains("shadow"));
    }

    #[test]
    fn test_hidden_slot_is_not_clickable() {
        assert!(slot_classes(Slot::Hidden).contains("pointer-events-none"));
    }
}
