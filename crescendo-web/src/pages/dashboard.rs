use crate::api;
use crescendo_ui::stores::{DashboardState, LoadingState};
use crescendo_ui::{DashboardView, ErrorDisplay, LoadingIndicator};
use dioxus::prelude::*;

/// Dashboard page
///
/// Fetches the combined profile payload once per mount and renders
/// whichever lifecycle state applies. The fetch task is owned by this
/// scope, so unmounting cancels it and the state can never settle late.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(DashboardState::default);

    use_future(move || async move {
        match api::fetch_dashboard().await {
            Ok(data) => {
                state
                    .write()
                    .resolve_ready(data.profile, data.top_artists, data.top_tracks)
            }
            Err(message) => state.write().resolve_error(message),
        }
    });

    let current = state.read();
    match (current.loading, current.profile.clone()) {
        (LoadingState::Loading, _) => rsx! {
            LoadingIndicator {}
        },
        (LoadingState::Errored, _) => rsx! {
            ErrorDisplay { message: current.error.clone().unwrap_or_default() }
        },
        (LoadingState::Ready, Some(profile)) => rsx! {
            DashboardView {
                profile,
                top_artists: current.top_artists.clone(),
                top_tracks: current.top_tracks.clone(),
            }
        },
        // Ready always carries a profile; render nothing if it somehow doesn't.
        (LoadingState::Ready, None) => rsx! {},
    }
}
