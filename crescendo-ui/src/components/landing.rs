//! Landing view component
//!
//! Marketing hero with a staggered entrance animation. The keyframes and
//! per-item delays live in main.css (`fade-up`, `fade-up-delay-*`).

use dioxus::prelude::*;

/// Landing hero (pure, props-based)
#[component]
pub fn LandingView(on_analyse: EventHandler<()>) -> Element {
    rsx! {
        main { class: "flex flex-col items-center mt-40 h-screen space-y-8 text-center",
            h1 { class: "text-8xl font-bold fade-up", "Analysis" }
            p { class: "text-2xl text-[#8C8C8C] fade-up fade-up-delay-1",
                "Reviews your Spotify listening activity and judges your mood"
            }
            button {
                class: "fade-up fade-up-delay-2 bg-[#00C407] text-white font-bold text-4xl px-20 py-10 rounded-full transform transition-transform duration-150 ease-out hover:scale-110 cursor-pointer",
                onclick: move |_| on_analyse.call(()),
                "Analyse"
            }
        }
    }
}
