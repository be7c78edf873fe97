//! Ideal-Type World Cup
//!
//! Setup (folder picker), matchups with a zoom preview, the bye screen and
//! the winner screen. The bracket itself lives in the core crate; this page
//! only owns the signal, the settle timer and the object URLs.

use leptos::*;

use classroom_arcade::{Bracket, Candidate, Phase, Side};

use crate::components::{
    alt_text, ButtonSize, ButtonTone, CandidateCard, CandidateName, CardAnimation, NeonButton,
};
use crate::files::{picked_files, revoke};
use crate::state::global::GlobalState;
use crate::state::TimerSlot;

fn animation_for(pending: Option<Side>, side: Side) -> CardAnimation {
    match (pending, side) {
        (None, _) => CardAnimation::None,
        (Some(Side::Left), Side::Left) => CardAnimation::WinLeft,
        (Some(Side::Right), Side::Right) => CardAnimation::WinRight,
        _ => CardAnimation::Lose,
    }
}

fn release(urls: StoredValue<Vec<String>>) {
    urls.try_update_value(|urls| {
        revoke(urls.iter().map(String::as_str));
        urls.clear();
    });
}

#[component]
pub fn TournamentPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let bracket = create_rw_signal(Bracket::new(state.rng()));
    let urls = store_value(Vec::<String>::new());
    let settle_timer = TimerSlot::default();

    {
        let settle_timer = settle_timer.clone();
        on_cleanup(move || {
            settle_timer.clear();
            release(urls);
        });
    }

    let phase = create_memo(move |_| bracket.with(|b| b.phase()));

    view! {
        <div class="max-w-5xl mx-auto">
            {move || match phase.get() {
                Phase::Setup => view! { <Setup bracket=bracket urls=urls /> }.into_view(),
                Phase::Playing => view! {
                    <Matchup bracket=bracket settle_timer=settle_timer.clone() />
                }.into_view(),
                Phase::Bye => view! { <ByeScreen bracket=bracket /> }.into_view(),
                Phase::Winner => view! { <WinnerScreen bracket=bracket urls=urls /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Setup(bracket: RwSignal<Bracket>, urls: StoredValue<Vec<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_pick = move |ev: web_sys::Event| {
        let files = picked_files(&ev);
        let loaded = bracket.try_update(|b| b.load_files(&files));

        match loaded {
            Some(Ok(())) => {
                let count = bracket.with_untracked(|b| b.candidates().len());
                web_sys::console::log_1(&format!("Tournament started with {} images", count).into());
                state.show_success(&format!("{} candidates loaded", count));
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

    view! {
        <div class="flex flex-col items-center space-y-8 py-12">
            <h1 class="text-4xl font-bold text-cyan-300 drop-shadow-[0_0_12px_#22d3ee]">
                "Ideal-Type World Cup"
            </h1>
            <p class="text-slate-400">"Choose a folder of images. Every image becomes a candidate."</p>

            <label class="flex items-center space-x-3 text-slate-300">
                <input
                    type="checkbox"
                    class="w-5 h-5 accent-cyan-400"
                    prop:checked=move || state.show_names.get()
                    on:change=move |ev| state.show_names.set(event_target_checked(&ev))
                />
                <span>"Show names under the pictures"</span>
            </label>

            <label class="cursor-pointer rounded-xl border-2 border-cyan-400 px-8 py-4 text-lg font-bold uppercase \
                          tracking-wider text-cyan-300 hover:bg-cyan-400/20 shadow-[0_0_12px_#22d3ee]">
                "📁 Pick Folder"
                <input
                    type="file"
                    class="hidden"
                    accept="image/*"
                    multiple=true
                    webkitdirectory=true
                    on:change=on_pick
                />
            </label>
        </div>
    }
}

#[component]
fn Matchup(bracket: RwSignal<Bracket>, settle_timer: TimerSlot) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let settle_delay = state.tournament_config().settle_delay();

    let pick = move |side: Side| {
        let picked = bracket.try_update(|b| b.select(side).map(|c| c.id.clone()));
        match picked {
            Some(Ok(id)) => {
                web_sys::console::log_1(&format!("Picked {}", id).into());
                settle_timer.schedule(settle_delay, move || {
                    bracket.update(|b| {
                        if let Err(e) = b.settle() {
                            web_sys::console::error_1(&format!("Settle failed: {}", e).into());
                        }
                    });
                });
            }
            // Double clicks while the animation plays
            Some(Err(_)) | None => {}
        }
    };
    let pick = store_value(pick);

    let zoom = move |side: Side| {
        bracket.update(|b| {
            let _ = b.open_preview(side);
        });
    };

    let header = move || {
        bracket.with(|b| {
            (
                b.round_label().to_string(),
                format!("Match {} of {}", b.match_number(), b.round_size() / 2),
            )
        })
    };

    let pair = create_memo(move |_| {
        bracket.with(|b| b.current_pair().map(|(l, r)| (l.clone(), r.clone())))
    });
    let pending = create_memo(move |_| bracket.with(|b| b.pending()));
    let show_names = state.show_names;

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <span class="rounded-full border-2 border-pink-400 px-4 py-1 text-pink-300 font-bold">
                    {move || header().0}
                </span>
                <span class="text-slate-400">{move || header().1}</span>
            </div>

            {move || pair.get().map(|(left, right)| view! {
                <div class="flex items-stretch gap-6">
                    <SideCard
                        candidate=left
                        side=Side::Left
                        pending=pending
                        show_names=show_names
                        on_pick=move |_| pick.with_value(|p| p(Side::Left))
                        on_zoom=move |_| zoom(Side::Left)
                    />
                    <div class="self-center text-3xl font-black text-pink-400">"VS"</div>
                    <SideCard
                        candidate=right
                        side=Side::Right
                        pending=pending
                        show_names=show_names
                        on_pick=move |_| pick.with_value(|p| p(Side::Right))
                        on_zoom=move |_| zoom(Side::Right)
                    />
                </div>
            })}

            <PreviewModal bracket=bracket on_select=move |side: Side| pick.with_value(|p| p(side)) />
        </div>
    }
}

#[component]
fn SideCard(
    candidate: Candidate,
    side: Side,
    pending: Memo<Option<Side>>,
    show_names: RwSignal<bool>,
    #[prop(into)] on_pick: Callback<()>,
    #[prop(into)] on_zoom: Callback<()>,
) -> impl IntoView {
    let animation = Signal::derive(move || animation_for(pending.get(), side));

    view! {
        <CandidateCard
            candidate=candidate
            animation=animation
            show_name=show_names
            on_pick=on_pick
            on_zoom=on_zoom
        />
    }
}

#[component]
fn PreviewModal(bracket: RwSignal<Bracket>, #[prop(into)] on_select: Callback<Side>) -> impl IntoView {
    let show_names = use_context::<GlobalState>().expect("GlobalState not found").show_names;
    let previewed = create_memo(move |_| {
        bracket.with(|b| b.preview().zip(b.previewed().cloned()))
    });

    view! {
        {move || previewed.get().map(|(preview, candidate)| view! {
            <div
                class="fixed inset-0 z-40 bg-black/80 flex items-center justify-center p-6"
                on:click=move |_| bracket.update(|b| b.close_preview())
            >
                <div
                    class="bg-slate-900 rounded-2xl border-2 border-cyan-400 p-6 max-w-3xl w-full space-y-4"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="h-[60vh] flex items-center justify-center overflow-hidden">
                        <img
                            src=candidate.image.clone()
                            alt=alt_text(&candidate, show_names.get_untracked())
                            class="max-h-full max-w-full object-contain transition-transform"
                            style=format!("transform: rotate({}deg);", candidate.rotation)
                        />
                    </div>
                    <CandidateName
                        candidate=candidate.clone()
                        show=show_names
                        class="text-center text-xl font-semibold"
                    />
                    <div class="flex justify-center gap-4">
                        <NeonButton on_click=move |_| {
                            bracket.update(|b| {
                                let _ = b.rotate_preview();
                            });
                        }>
                            "⟳ Rotate"
                        </NeonButton>
                        <NeonButton tone=ButtonTone::Gold on_click=move |_| on_select.call(preview.side)>
                            "Pick This One"
                        </NeonButton>
                        <NeonButton tone=ButtonTone::Pink on_click=move |_| bracket.update(|b| b.close_preview())>
                            "Close"
                        </NeonButton>
                    </div>
                </div>
            </div>
        })}
    }
}

#[component]
fn ByeScreen(bracket: RwSignal<Bracket>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let lucky = bracket.with_untracked(|b| b.bye_candidate().cloned());

    let next_round = move |_: ()| {
        let advanced = bracket.try_update(|b| b.advance());
        if let Some(Err(e)) = advanced {
            state.show_error(&e.to_string());
        }
    };

    view! {
        <div class="flex flex-col items-center space-y-6 py-10">
            <h2 class="text-3xl font-bold text-amber-300">"Lucky Bye!"</h2>
            <p class="text-slate-400">"No opponent left this round, so this one goes straight through."</p>
            {lucky.map(|c| view! {
                <div class="w-72 rounded-2xl border-2 border-amber-400 bg-slate-900 p-3 shadow-[0_0_24px_#fbbf24]">
                    <img
                        src=c.image.clone()
                        alt=alt_text(&c, state.show_names.get_untracked())
                        class="w-full aspect-square object-contain rounded-xl bg-black"
                        style=format!("transform: rotate({}deg);", c.rotation)
                    />
                    <CandidateName candidate=c.clone() show=state.show_names class="mt-3 text-center text-lg font-semibold" />
                </div>
            })}
            <NeonButton tone=ButtonTone::Gold size=ButtonSize::Lg on_click=next_round>
                "Next Round →"
            </NeonButton>
        </div>
    }
}

#[component]
fn WinnerScreen(bracket: RwSignal<Bracket>, urls: StoredValue<Vec<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let winner = bracket.with_untracked(|b| b.winner().cloned());

    let restart = move |_: ()| {
        release(urls);
        bracket.update(|b| b.reset());
    };

    view! {
        <div class="flex flex-col items-center space-y-6 py-10">
            <h2 class="text-4xl font-black text-amber-300 drop-shadow-[0_0_16px_#fbbf24]">"🏆 Winner 🏆"</h2>
            {winner.map(|c| view! {
                <div class="w-96 max-w-full rounded-2xl border-4 border-amber-400 bg-slate-900 p-4 shadow-[0_0_40px_#fbbf24]">
                    <img
                        src=c.image.clone()
                        alt=alt_text(&c, state.show_names.get_untracked())
                        class="w-full aspect-square object-contain rounded-xl bg-black"
                        style=format!("transform: rotate({}deg);", c.rotation)
                    />
                    <CandidateName candidate=c.clone() show=state.show_names class="mt-4 text-center text-2xl font-bold" />
                </div>
            })}
            <NeonButton tone=ButtonTone::Cyan size=ButtonSize::Lg on_click=restart>
                "Play Again"
            </NeonButton>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_for_pending_pick() {
        assert_eq!(animation_for(None, Side::Left), CardAnimation::None);
        assert_eq!(animation_for(Some(Side::Left), Side::Left), CardAnimation::WinLeft);
        assert_eq!(animation_for(Some(Side::Left), Side::Right), CardAnimation::Lose);
        assert_eq!(animation_for(Some(Side::Right), Side::Right), CardAnimation::WinRight);
        assert_eq!(animation_for(Some(Side::Right), Side::Left), CardAnimation::Lose);
    }
}
