//! Dashboard state store

use crate::display_types::{Artist, Profile, Track};

/// Loading status for the dashboard view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Profile fetch still in flight
    #[default]
    Loading,
    /// Fetch succeeded, data populated
    Ready,
    /// Fetch failed, `error` holds the message
    Errored,
}

/// State for the dashboard view
///
/// Starts in `Loading` and settles exactly once per mount. `Ready` and
/// `Errored` are terminal: a resolution arriving after the state has
/// settled is ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Fetched profile, `None` until the fetch succeeds
    pub profile: Option<Profile>,
    /// Top artists in response order
    pub top_artists: Vec<Artist>,
    /// Top tracks in response order
    pub top_tracks: Vec<Track>,
    pub loading: LoadingState,
    /// Error message, `Some` exactly when `Errored`
    pub error: Option<String>,
}

impl DashboardState {
    /// Settle into `Ready` with the fetched data. No-op unless `Loading`.
    pub fn resolve_ready(
        &mut self,
        profile: Profile,
        top_artists: Vec<Artist>,
        top_tracks: Vec<Track>,
    ) {
        if self.loading != LoadingState::Loading {
            return;
        }
        self.profile = Some(profile);
        self.top_artists = top_artists;
        self.top_tracks = top_tracks;
        self.loading = LoadingState::Ready;
    }

    /// Settle into `Errored` with a message. No-op unless `Loading`.
    pub fn resolve_error(&mut self, message: impl Into<String>) {
        if self.loading != LoadingState::Loading {
            return;
        }
        self.error = Some(message.into());
        self.loading = LoadingState::Errored;
    }

    pub fn is_loading(&self) -> bool {
        self.loading == LoadingState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            display_name: "Alice".to_string(),
            follower_count: 5,
            image_url: None,
        }
    }

    fn artists() -> Vec<Artist> {
        vec![
            Artist {
                id: "a1".to_string(),
                name: "Artist1".to_string(),
                image_url: None,
            },
            Artist {
                id: "a2".to_string(),
                name: "Artist2".to_string(),
                image_url: None,
            },
        ]
    }

    fn tracks() -> Vec<Track> {
        vec![Track {
            id: "t1".to_string(),
            name: "Track1".to_string(),
            artist_name: "Artist1".to_string(),
        }]
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert_eq!(state.loading, LoadingState::Loading);
        assert!(state.profile.is_none());
        assert!(state.top_artists.is_empty());
        assert!(state.top_tracks.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn resolve_ready_populates_in_order() {
        let mut state = DashboardState::default();
        state.resolve_ready(profile(), artists(), tracks());

        assert_eq!(state.loading, LoadingState::Ready);
        assert!(!state.is_loading());
        assert_eq!(state.profile, Some(profile()));
        let names: Vec<_> = state.top_artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Artist1", "Artist2"]);
        assert_eq!(state.top_tracks[0].name, "Track1");
        assert!(state.error.is_none());
    }

    #[test]
    fn resolve_error_records_message() {
        let mut state = DashboardState::default();
        state.resolve_error("Not authenticated");

        assert_eq!(state.loading, LoadingState::Errored);
        assert_eq!(state.error.as_deref(), Some("Not authenticated"));
        assert!(state.profile.is_none());
    }

    #[test]
    fn ready_is_terminal() {
        let mut state = DashboardState::default();
        state.resolve_ready(profile(), artists(), tracks());
        state.resolve_error("late failure");

        assert_eq!(state.loading, LoadingState::Ready);
        assert!(state.error.is_none());
    }

    #[test]
    fn errored_is_terminal() {
        let mut state = DashboardState::default();
        state.resolve_error("connection refused");
        state.resolve_ready(profile(), artists(), tracks());

        assert_eq!(state.loading, LoadingState::Errored);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(state.profile.is_none());
    }
}
