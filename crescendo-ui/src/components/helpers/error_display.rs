//! Error display component

use dioxus::prelude::*;

/// Centered error message, rendered in place of the page content
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        p { class: "text-center mt-20 text-red-500", "{message}" }
    }
}
