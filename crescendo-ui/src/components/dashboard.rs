//! Dashboard view component - pure view over fetched profile data

use crate::display_types::{Artist, Profile, Track};
use dioxus::prelude::*;

/// Dashboard view (pure, props-based)
///
/// Renders the profile header, the top-artists grid, and the top-tracks
/// list. Images are optional at every level and skipped when absent.
#[component]
pub fn DashboardView(
    profile: Profile,
    top_artists: Vec<Artist>,
    top_tracks: Vec<Track>,
) -> Element {
    rsx! {
        div { class: "p-10",
            // Profile header
            div { class: "flex items-center space-x-6",
                if let Some(url) = &profile.image_url {
                    img {
                        src: "{url}",
                        alt: "Profile",
                        class: "w-24 h-24 rounded-full",
                    }
                }
                div {
                    h1 { class: "text-3xl font-bold", "{profile.display_name}" }
                    p { class: "text-gray-500", "Followers: {profile.follower_count}" }
                }
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold mb-4", "Top Artists" }
                ul { class: "grid grid-cols-2 md:grid-cols-5 gap-4",
                    for artist in top_artists.iter() {
                        li { key: "{artist.id}", class: "text-center",
                            if let Some(url) = &artist.image_url {
                                img {
                                    src: "{url}",
                                    alt: "{artist.name}",
                                    class: "rounded-lg",
                                }
                            }
                            p { class: "mt-2 font-semibold", "{artist.name}" }
                        }
                    }
                }
            }

            section { class: "mt-12",
                h2 { class: "text-2xl font-bold mb-4", "Top Tracks" }
                ul { class: "space-y-2",
                    for track in top_tracks.iter() {
                        li { key: "{track.id}", "🎵 {track.name} — {track.artist_name}" }
                    }
                }
            }
        }
    }
}
