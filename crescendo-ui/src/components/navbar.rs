//! Navigation bar view component
//!
//! Pure, props-based: receives the session flag and a callback per action.
//! Redirect targets and client-side routing live with the caller.

use dioxus::prelude::*;

const HOVER_SCALE: &str = "transform transition-transform duration-150 ease-out hover:scale-110";

/// Top navigation bar (pure, props-based)
///
/// Logged out it offers only the login button; logged in it swaps to the
/// genres/dashboard/logout controls.
#[component]
pub fn NavbarView(
    logged_in: bool,
    on_brand_click: EventHandler<()>,
    on_login: EventHandler<()>,
    on_genres: EventHandler<()>,
    on_dashboard: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bg-black text-xl font-bold text-white flex px-14 py-8 justify-between items-center",
            a {
                class: "{HOVER_SCALE} hover:text-green-400 cursor-pointer",
                onclick: move |_| on_brand_click.call(()),
                "Crescendo"
            }

            if !logged_in {
                button {
                    class: "bg-[#00C407] hover:bg-green-600 text-white px-6 py-2 rounded-lg cursor-pointer {HOVER_SCALE}",
                    onclick: move |_| on_login.call(()),
                    "Login with Spotify"
                }
            } else {
                div { class: "flex items-center space-x-12",
                    a {
                        class: "hover:text-green-400 cursor-pointer {HOVER_SCALE}",
                        onclick: move |_| on_genres.call(()),
                        "Genres"
                    }
                    a {
                        class: "hover:text-green-400 cursor-pointer {HOVER_SCALE}",
                        onclick: move |_| on_dashboard.call(()),
                        "Dashboard"
                    }
                    button {
                        class: "bg-[#ff0000] hover:bg-red-700 text-white px-6 py-2 rounded-lg cursor-pointer {HOVER_SCALE}",
                        onclick: move |_| on_logout.call(()),
                        "Logout"
                    }
                }
            }
        }
    }
}
