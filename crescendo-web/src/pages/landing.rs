use crescendo_ui::LandingView;
use dioxus::prelude::*;

/// Landing page. The Analyse call-to-action is not wired to anything yet.
#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingView { on_analyse: |_| {} }
    }
}
