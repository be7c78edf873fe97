//! Neon Button
//!
//! The glowing button used across both games.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTone {
    #[default]
    Cyan,
    Pink,
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

impl ButtonTone {
    fn classes(self) -> &'static str {
        match self {
            ButtonTone::Cyan => "border-cyan-400 text-cyan-300 hover:bg-cyan-400/20 shadow-[0_0_12px_#22d3ee]",
            ButtonTone::Pink => "border-pink-400 text-pink-300 hover:bg-pink-400/20 shadow-[0_0_12px_#f472b6]",
            ButtonTone::Gold => "border-amber-400 text-amber-300 hover:bg-amber-400/20 shadow-[0_0_12px_#fbbf24]",
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

#[component]
pub fn NeonButton(
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] tone: ButtonTone,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "rounded-xl border-2 font-bold uppercase tracking-wider transition-all {} {}",
        tone.classes(),
        size.classes()
    );

    view! {
        <button
            class=class
            on:click=move |_| on_click.call(())
        >
            {children()}
        </button>
    }
}
