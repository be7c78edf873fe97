//! Candidate card for the tournament matchup.

use leptos::*;

use classroom_arcade::Candidate;

/// Animation applied while a pick settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAnimation {
    None,
    WinLeft,
    WinRight,
    Lose,
}

impl CardAnimation {
    pub fn class(self) -> &'static str {
        match self {
            CardAnimation::None => "",
            CardAnimation::WinLeft => "anim-win-left",
            CardAnimation::WinRight => "anim-win-right",
            CardAnimation::Lose => "anim-lose",
        }
    }
}

/// Image alt text that doesn't give the name away while names are hidden
pub fn alt_text(candidate: &Candidate, show_names: bool) -> String {
    candidate
        .visible_name(show_names)
        .unwrap_or("Candidate")
        .to_string()
}

/// Caption under a candidate; nothing while names are hidden
#[component]
pub fn CandidateName(
    candidate: Candidate,
    #[prop(into)] show: Signal<bool>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    move || {
        candidate
            .visible_name(show.get())
            .map(|name| view! { <p class=class>{name.to_string()}</p> })
    }
}

/// Keyframes for the pick animations. Kept inline so the card works without
/// extra stylesheets.
const CARD_STYLE: &str = r#"
@keyframes win-left { 0% { transform: scale(1); } 60% { transform: translateX(25%) scale(1.15); } 100% { transform: translateX(25%) scale(1.1); } }
@keyframes win-right { 0% { transform: scale(1); } 60% { transform: translateX(-25%) scale(1.15); } 100% { transform: translateX(-25%) scale(1.1); } }
@keyframes lose { to { opacity: 0; transform: scale(0.7); filter: grayscale(1); } }
.anim-win-left { animation: win-left 1.2s ease forwards; z-index: 10; }
.anim-win-right { animation: win-right 1.2s ease forwards; z-index: 10; }
.anim-lose { animation: lose 1.2s ease forwards; }
"#;

#[component]
pub fn CandidateCard(
    candidate: Candidate,
    #[prop(into)] animation: Signal<CardAnimation>,
    #[prop(into)] show_name: Signal<bool>,
    #[prop(into)] on_pick: Callback<()>,
    #[prop(into)] on_zoom: Callback<()>,
) -> impl IntoView {
    let rotation = format!("transform: rotate({}deg);", candidate.rotation);
    let alt = {
        let candidate = candidate.clone();
        move || alt_text(&candidate, show_name.get())
    };

    view! {
        <style>{CARD_STYLE}</style>
        <div
            class=move || format!(
                "relative flex-1 rounded-2xl border-2 border-cyan-400/70 bg-slate-900 p-3 \
                 cursor-pointer hover:shadow-[0_0_24px_#22d3ee] transition-shadow {}",
                animation.get().class()
            )
            on:click=move |_| on_pick.call(())
        >
            <div class="aspect-square overflow-hidden rounded-xl bg-black flex items-center justify-center">
                <img
                    src=candidate.image.clone()
                    alt=alt
                    class="max-h-full max-w-full object-contain transition-transform"
                    style=rotation
                />
            </div>

            <CandidateName
                candidate=candidate.clone()
                show=show_name
                class="mt-3 text-center text-lg font-semibold truncate"
            />

            <button
                class="absolute top-4 right-4 w-10 h-10 rounded-full bg-slate-900/80 border border-slate-600 hover:border-cyan-400"
                title="Zoom"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_zoom.call(());
                }
            >
                "🔍"
            </button>
        </div>
    }
}
