//! Neon Memory
//!
//! Menu, custom pair editor, pair preview, the board, the result screen and
//! the pair review. Timing lives here: the resolve and result timeouts and
//! the one-second clock.

use leptos::*;
use std::time::Duration;

use classroom_arcade::memory::{
    format_clock, CardContent, FlipOutcome, MemoryCard, MemoryGame, MemoryPhase, PairSide,
    Resolution,
};

use crate::components::{ButtonSize, ButtonTone, NeonButton};
use crate::files::{picked_files, picked_image, revoke};
use crate::state::global::GlobalState;
use crate::state::{ClockSlot, TimerSlot};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

fn revoke_image(content: &CardContent) {
    if let CardContent::Image(url) = content {
        revoke([url.as_str()]);
    }
}

fn release(urls: StoredValue<Vec<String>>) {
    urls.try_update_value(|urls| {
        revoke(urls.iter().map(String::as_str));
        urls.clear();
    });
}

/// Board width: five columns once the deck reaches twenty cards
fn grid_class(cards: usize) -> &'static str {
    if cards >= 20 {
        "grid-cols-4 md:grid-cols-5"
    } else {
        "grid-cols-4"
    }
}

#[component]
pub fn MemoryPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let game = create_rw_signal(MemoryGame::new(state.memory_config(), state.rng()));
    // Object URLs of an auto deck. Custom images belong to the editor rows.
    let urls = store_value(Vec::<String>::new());

    let resolve_timer = TimerSlot::default();
    let result_timer = TimerSlot::default();
    let clock = ClockSlot::default();

    let phase = create_memo(move |_| game.with(|g| g.phase()));

    {
        let clock = clock.clone();
        create_effect(move |_| {
            if phase.get() == MemoryPhase::Playing {
                clock.start(CLOCK_PERIOD, move || {
                    game.update(|g| {
                        g.tick();
                    });
                });
            } else {
                clock.stop();
            }
        });
    }

    {
        let (resolve_timer, result_timer, clock) =
            (resolve_timer.clone(), result_timer.clone(), clock.clone());
        on_cleanup(move || {
            resolve_timer.clear();
            result_timer.clear();
            clock.stop();
            release(urls);
            game.try_with_untracked(|g| {
                for row in g.editor().rows() {
                    revoke_image(&row.left);
                    revoke_image(&row.right);
                }
            });
        });
    }

    let flip = move |id: String| {
        let outcome = game.try_update(|g| g.flip(&id));
        let Some(FlipOutcome::Pending { delay, .. }) = outcome else {
            return;
        };

        let result_timer = result_timer.clone();
        resolve_timer.schedule(delay, move || {
            let resolution = game.try_update(|g| g.resolve()).flatten();
            if let Some(Resolution {
                result_delay: Some(wait),
                ..
            }) = resolution
            {
                result_timer.schedule(wait, move || {
                    game.update(|g| {
                        if let Err(e) = g.show_result() {
                            web_sys::console::error_1(&format!("Result failed: {}", e).into());
                        }
                    });
                });
            }
        });
    };
    let flip = store_value(flip);

    let to_menu = Callback::new(move |_: ()| {
        let discarded = game.try_update(|g| g.return_to_menu()).unwrap_or_default();
        web_sys::console::log_1(&format!("Discarded {} cards", discarded.len()).into());
        release(urls);
    });

    view! {
        <div class="max-w-5xl mx-auto">
            {move || match phase.get() {
                MemoryPhase::Menu => view! { <Menu game=game urls=urls /> }.into_view(),
                MemoryPhase::SetupCustom => view! { <CustomSetup game=game /> }.into_view(),
                MemoryPhase::PreviewCustom => view! { <CustomPreview game=game /> }.into_view(),
                MemoryPhase::Playing => view! {
                    <Board game=game on_flip=move |id: String| flip.with_value(|f| f(id)) />
                }.into_view(),
                MemoryPhase::Result => view! { <ResultScreen game=game on_menu=to_menu /> }.into_view(),
                MemoryPhase::ReviewPairs => view! { <PairReview game=game /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Menu(game: RwSignal<MemoryGame>, urls: StoredValue<Vec<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_pick = move |ev: web_sys::Event| {
        let files = picked_files(&ev);
        match game.try_update(|g| g.start_auto(&files)) {
            Some(Ok(())) => {
                let pairs = game.with_untracked(|g| g.total_pairs());
                state.show_success(&format!("{} pairs dealt", pairs));
                urls.update_value(|urls| {
                    urls.extend(files.into_iter().map(|f| f.image_ref).filter(|u| !u.is_empty()));
                });
            }
            Some(Err(e)) => {
                revoke(files.iter().map(|f| f.image_ref.as_str()));
                state.show_error(&e.to_string());
            }
            None => {}
        }
    };

    let open_custom = move |_: ()| {
        game.update(|g| {
            let _ = g.open_custom_setup();
        });
    };

    view! {
        <div class="flex flex-col items-center space-y-10 py-12">
            <h1 class="text-5xl font-black text-green-300 drop-shadow-[0_0_14px_#4ade80]">"Neon Memory"</h1>
            <div class="grid md:grid-cols-2 gap-6 w-full max-w-2xl">
                <label class="cursor-pointer rounded-2xl border-2 border-cyan-400 bg-slate-900 p-6 text-center \
                              hover:bg-cyan-400/10 shadow-[0_0_16px_#22d3ee]">
                    <span class="block text-2xl font-bold text-cyan-300">"📁 Auto Mode"</span>
                    <span class="block text-slate-400 mt-2">"Pick a folder. Each image makes a pair."</span>
                    <input
                        type="file"
                        class="hidden"
                        accept="image/*"
                        multiple=true
                        webkitdirectory=true
                        on:change=on_pick
                    />
                </label>
                <button
                    class="rounded-2xl border-2 border-pink-400 bg-slate-900 p-6 text-center \
                           hover:bg-pink-400/10 shadow-[0_0_16px_#f472b6]"
                    on:click=move |_| open_custom(())
                >
                    <span class="block text-2xl font-bold text-pink-300">"✏️ Custom Mode"</span>
                    <span class="block text-slate-400 mt-2">"Make your own pairs from words and pictures."</span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn CustomSetup(game: RwSignal<MemoryGame>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let row_ids = move || game.with(|g| g.editor().rows().iter().map(|r| r.id).collect::<Vec<_>>());
    let complete = move || game.with(|g| g.editor().complete_pairs().len());

    let add_row = move |_: ()| {
        game.update(|g| {
            g.editor_mut().add_row();
        });
    };
    let cancel = move |_: ()| {
        game.update(|g| {
            let _ = g.cancel_custom();
        });
    };
    let review = move |_: ()| {
        if let Some(Err(e)) = game.try_update(|g| g.review_custom()) {
            state.show_error(&e.to_string());
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-3xl font-bold text-pink-300">"Make Your Pairs"</h2>
                <span class="text-slate-400">{move || format!("{} complete", complete())}</span>
            </div>

            <div class="space-y-3">
                <For each=row_ids key=|id| *id children=move |id| view! { <PairRow game=game id=id /> } />
            </div>

            <div class="flex flex-wrap gap-4 justify-between">
                <NeonButton on_click=add_row>"+ Add Pair"</NeonButton>
                <div class="flex gap-4">
                    <NeonButton tone=ButtonTone::Pink on_click=cancel>"Back"</NeonButton>
                    <NeonButton tone=ButtonTone::Gold on_click=review>"Preview →"</NeonButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PairRow(game: RwSignal<MemoryGame>, id: u64) -> impl IntoView {
    let remove = move |_| {
        game.update(|g| {
            if let Some(row) = g.editor().rows().iter().find(|r| r.id == id) {
                revoke_image(&row.left);
                revoke_image(&row.right);
            }
            let _ = g.editor_mut().remove_row(id);
        });
    };

    view! {
        <div class="flex items-center gap-3 rounded-xl border border-slate-700 bg-slate-900 p-3">
            <SideEditor game=game id=id side=PairSide::Left />
            <span class="text-pink-400 font-bold">"↔"</span>
            <SideEditor game=game id=id side=PairSide::Right />
            <button
                class="w-9 h-9 rounded-full text-slate-400 hover:text-pink-300 hover:bg-slate-800"
                title="Remove pair"
                on:click=remove
            >
                "✕"
            </button>
        </div>
    }
}

#[component]
fn SideEditor(game: RwSignal<MemoryGame>, id: u64, side: PairSide) -> impl IntoView {
    let content = create_memo(move |_| {
        game.with(|g| {
            g.editor()
                .rows()
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.side(side).clone())
                .unwrap_or_default()
        })
    });

    let replace = move |new: CardContent| {
        game.update(|g| {
            if let Ok(old) = g.editor_mut().set(id, side, new) {
                revoke_image(&old);
            }
        });
    };

    let on_image = move |ev: web_sys::Event| {
        if let Some(file) = picked_image(&ev) {
            replace(CardContent::Image(file.image_ref));
        }
    };

    // Swap widgets only when the kind changes so the text input keeps focus
    let is_image = create_memo(move |_| matches!(content.get(), CardContent::Image(_)));
    let payload = move || content.with(|c| c.payload().to_string());

    view! {
        <div class="flex-1 flex items-center gap-2">
            {move || if is_image.get() {
                view! {
                    <div class="relative h-14 w-14">
                        <img src=payload class="h-14 w-14 object-cover rounded-lg border border-cyan-400" />
                        <button
                            class="absolute -top-2 -right-2 w-5 h-5 rounded-full bg-slate-800 text-xs"
                            title="Remove image"
                            on:click=move |_| replace(CardContent::default())
                        >
                            "✕"
                        </button>
                    </div>
                }.into_view()
            } else {
                view! {
                    <input
                        type="text"
                        class="flex-1 rounded-lg bg-slate-800 border border-slate-600 px-3 py-2 \
                               focus:border-cyan-400 focus:outline-none"
                        placeholder="Word or phrase"
                        prop:value=payload
                        on:input=move |ev| replace(CardContent::Text(event_target_value(&ev)))
                    />
                }.into_view()
            }}
            <label class="cursor-pointer text-xl" title="Use a picture">
                "🖼"
                <input type="file" class="hidden" accept="image/*" on:change=on_image />
            </label>
        </div>
    }
}

#[component]
fn CustomPreview(game: RwSignal<MemoryGame>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let pairs = game.with_untracked(|g| g.editor().complete_pairs());
    let count = pairs.len();

    let edit = move |_: ()| {
        game.update(|g| {
            let _ = g.edit_custom();
        });
    };
    let start = move |_: ()| {
        match game.try_update(|g| g.start_custom()) {
            Some(Ok(())) => state.show_success(&format!("{} pairs dealt", count)),
            Some(Err(e)) => state.show_error(&e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-pink-300">{format!("{} Pairs Ready", count)}</h2>
            <div class="grid md:grid-cols-2 gap-4">
                {pairs
                    .into_iter()
                    .map(|pair| view! {
                        <div class="flex items-center gap-4 rounded-xl border border-slate-700 bg-slate-900 p-3">
                            <div class="flex-1 h-20">{face(&pair.left)}</div>
                            <span class="text-pink-400">"↔"</span>
                            <div class="flex-1 h-20">{face(&pair.right)}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-center gap-4">
                <NeonButton tone=ButtonTone::Pink on_click=edit>"← Edit"</NeonButton>
                <NeonButton tone=ButtonTone::Gold size=ButtonSize::Lg on_click=start>"Start Game"</NeonButton>
            </div>
        </div>
    }
}

/// Face-up content of a card
fn face(content: &CardContent) -> View {
    match content {
        CardContent::Image(url) => view! {
            <img src=url.clone() class="h-full w-full object-contain" />
        }
        .into_view(),
        CardContent::Text(text) => view! {
            <span class="h-full w-full flex items-center justify-center text-center font-bold break-words px-1">
                {text.clone()}
            </span>
        }
        .into_view(),
    }
}

#[component]
fn Board(game: RwSignal<MemoryGame>, #[prop(into)] on_flip: Callback<String>) -> impl IntoView {
    let status = move || {
        game.with(|g| {
            (
                format_clock(g.elapsed_secs()),
                g.moves(),
                format!("{} / {}", g.matched_pairs(), g.total_pairs()),
            )
        })
    };
    let ids = game.with_untracked(|g| g.cards().iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    let columns = grid_class(ids.len());

    view! {
        <div class="space-y-6">
            <div class="flex justify-around rounded-xl border border-slate-700 bg-slate-900 py-3 text-lg">
                <span>"⏱ " {move || status().0}</span>
                <span>"Moves " {move || status().1}</span>
                <span>"Pairs " {move || status().2}</span>
            </div>
            <div class=format!("grid gap-3 {}", columns)>
                {ids
                    .into_iter()
                    .map(|id| view! { <CardTile game=game id=id on_flip=on_flip /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CardTile(game: RwSignal<MemoryGame>, id: String, on_flip: Callback<String>) -> impl IntoView {
    let card = {
        let id = id.clone();
        create_memo(move |_| game.with(|g| g.card(&id).cloned()))
    };

    let tile_class = move || {
        let base = "aspect-square rounded-xl border-2 transition-all duration-300 overflow-hidden";
        match card.get() {
            Some(MemoryCard { matched: true, .. }) => format!("{} opacity-60 scale-95", base),
            Some(c) if c.is_revealed() => format!("{} bg-slate-900", base),
            _ => format!("{} bg-slate-800 border-slate-600 hover:border-green-400", base),
        }
    };
    let glow = move || {
        card.get()
            .filter(MemoryCard::is_revealed)
            .map(|c| format!("border-color: {0}; box-shadow: 0 0 18px {0};", c.color))
            .unwrap_or_default()
    };

    view! {
        <button class=tile_class style=glow on:click=move |_| on_flip.call(id.clone())>
            {move || match card.get() {
                Some(c) if c.is_revealed() => face(&c.content),
                _ => view! {
                    <span class="text-3xl font-black text-green-400/60">"?"</span>
                }
                .into_view(),
            }}
        </button>
    }
}

#[component]
fn ResultScreen(game: RwSignal<MemoryGame>, on_menu: Callback<()>) -> impl IntoView {
    let stats = game.with_untracked(|g| g.stats());

    let review = move |_: ()| {
        game.update(|g| {
            let _ = g.review_pairs();
        });
    };

    view! {
        <div class="flex flex-col items-center space-y-6 py-12">
            <h2 class="text-5xl font-black text-green-300 drop-shadow-[0_0_16px_#4ade80]">"Cleared!"</h2>
            <div class="grid grid-cols-3 gap-6 text-center">
                <Stat label="Pairs" value=stats.pairs.to_string() />
                <Stat label="Moves" value=stats.moves.to_string() />
                <Stat label="Time" value=format_clock(stats.elapsed_secs) />
            </div>
            <div class="flex gap-4">
                <NeonButton on_click=review>"Review Pairs"</NeonButton>
                <NeonButton tone=ButtonTone::Gold size=ButtonSize::Lg on_click=on_menu>"Menu"</NeonButton>
            </div>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-700 bg-slate-900 px-6 py-4">
            <div class="text-3xl font-bold">{value}</div>
            <div class="text-slate-400 text-sm uppercase tracking-wider">{label}</div>
        </div>
    }
}

#[component]
fn PairReview(game: RwSignal<MemoryGame>) -> impl IntoView {
    let pairs = game.with_untracked(|g| {
        g.pairs()
            .into_iter()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect::<Vec<_>>()
    });

    let back = move |_: ()| {
        game.update(|g| {
            let _ = g.back_to_result();
        });
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-green-300">"All Pairs"</h2>
            <div class="grid md:grid-cols-2 gap-4">
                {pairs
                    .into_iter()
                    .map(|(a, b)| view! {
                        <div
                            class="flex items-center gap-4 rounded-xl border-2 bg-slate-900 p-3"
                            style=format!("border-color: {};", a.color)
                        >
                            <div class="flex-1 h-24">{face(&a.content)}</div>
                            <div class="flex-1 h-24">{face(&b.content)}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-center">
                <NeonButton tone=ButtonTone::Pink on_click=back>"← Back"</NeonButton>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_widens_for_big_decks() {
        assert_eq!(grid_class(8), "grid-cols-4");
        assert_eq!(grid_class(20), "grid-cols-4 md:grid-cols-5");
    }
}
