//! Classroom Arcade
//!
//! Browser frontend for the arcade, built with Leptos (WASM).
//!
//! # Games
//!
//! - Ideal-Type World Cup: knockout bracket over a folder of images
//! - Neon Memory: matching pairs, from images or hand-made pairs
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Game rules come from the `classroom_arcade` crate; this
//! crate owns the signals, timers and markup. Picked files never leave the
//! browser: they are shown through object URLs.

use leptos::*;

mod app;
mod components;
mod files;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
