use crate::{api, nav, Route};
use crescendo_ui::NavbarView;
use dioxus::prelude::*;

/// Layout wrapping every route: navbar on top, routed page below.
///
/// Probes the session once per mount. Until (and unless) the probe says
/// otherwise, the navbar renders logged out.
#[component]
pub fn AppLayout() -> Element {
    let mut logged_in = use_signal(|| false);

    use_future(move || async move {
        logged_in.set(api::fetch_auth_status().await);
    });

    rsx! {
        NavbarView {
            logged_in: logged_in(),
            on_brand_click: move |_| {
                navigator().push(Route::Landing {});
            },
            on_login: |_| nav::redirect(&nav::login_url()),
            on_genres: |_| nav::redirect(&nav::genres_url()),
            on_dashboard: move |_| {
                navigator().push(Route::Dashboard {});
            },
            on_logout: |_| nav::redirect(&nav::logout_url()),
        }
        Outlet::<Route> {}
    }
}
