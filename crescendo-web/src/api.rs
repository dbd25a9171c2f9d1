use crescendo_ui::display_types::{Artist, Profile, Track};
use serde::Deserialize;

/// Backend origin. Sessions are cookie-based, so every call includes
/// credentials.
const API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Build an absolute backend URL from a path like `/api/profile`.
pub fn api_url(path: &str) -> String {
    format!("{API_ORIGIN}{path}")
}

// -- Wire types for the combined profile endpoint --

#[derive(Deserialize, Debug)]
struct ProfileEnvelope {
    profile: WireProfile,
    top_artists: WireItems<WireArtist>,
    top_tracks: WireItems<WireTrack>,
}

#[derive(Deserialize, Debug)]
struct WireItems<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Deserialize, Debug)]
struct WireProfile {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    followers: WireFollowers,
    #[serde(default)]
    images: Vec<WireImage>,
}

#[derive(Deserialize, Default, Debug)]
struct WireFollowers {
    #[serde(default)]
    total: i64,
}

#[derive(Deserialize, Debug)]
struct WireImage {
    url: String,
}

#[derive(Deserialize, Default, Debug)]
struct WireArtist {
    id: String,
    name: String,
    #[serde(default)]
    images: Vec<WireImage>,
}

#[derive(Deserialize, Default, Debug)]
struct WireTrack {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<WireTrackArtist>,
}

#[derive(Deserialize, Debug)]
struct WireTrackArtist {
    name: String,
}

#[derive(Deserialize, Debug)]
struct AuthStatusEnvelope {
    status: bool,
}

/// Everything the dashboard renders, already mapped to display types.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub profile: Profile,
    pub top_artists: Vec<Artist>,
    pub top_tracks: Vec<Track>,
}

fn first_image_url(images: &[WireImage]) -> Option<String> {
    images.first().map(|i| i.url.clone())
}

/// Map the wire envelope to display types, preserving list order.
fn to_dashboard_data(envelope: ProfileEnvelope) -> DashboardData {
    let profile = Profile {
        image_url: first_image_url(&envelope.profile.images),
        display_name: envelope.profile.display_name,
        follower_count: envelope.profile.followers.total,
    };

    let top_artists = envelope
        .top_artists
        .items
        .into_iter()
        .map(|a| Artist {
            image_url: first_image_url(&a.images),
            id: a.id,
            name: a.name,
        })
        .collect();

    let top_tracks = envelope
        .top_tracks
        .items
        .into_iter()
        .map(|t| Track {
            artist_name: t
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            id: t.id,
            name: t.name,
        })
        .collect();

    DashboardData {
        profile,
        top_artists,
        top_tracks,
    }
}

/// Decode an auth-status body. Anything malformed counts as logged out.
fn decode_auth_status(body: &[u8]) -> bool {
    serde_json::from_slice::<AuthStatusEnvelope>(body)
        .map(|e| e.status)
        .unwrap_or(false)
}

/// GET with cookies included.
fn credentialed_get(url: &str) -> reqwest::RequestBuilder {
    let builder = reqwest::Client::new().get(url);
    #[cfg(target_arch = "wasm32")]
    let builder = builder.fetch_credentials_include();
    builder
}

/// Map a profile response to dashboard data.
///
/// A non-success status means the backend has no session for us and maps
/// to a fixed message; the body is not inspected in that case. Decode
/// failures surface with the decoder's own message text.
fn decode_profile_response(success: bool, body: &[u8]) -> Result<DashboardData, String> {
    if !success {
        return Err("Not authenticated".to_string());
    }

    let envelope: ProfileEnvelope = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    Ok(to_dashboard_data(envelope))
}

/// Fetch the combined profile + top-items payload for the dashboard.
///
/// Transport failures surface with their own message text.
pub async fn fetch_dashboard() -> Result<DashboardData, String> {
    let resp = credentialed_get(&api_url("/api/profile"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return decode_profile_response(false, &[]);
    }

    let body = resp.bytes().await.map_err(|e| e.to_string())?;
    decode_profile_response(true, &body)
}

/// Probe whether the backend has an authenticated session.
///
/// Fails closed: any transport or decode problem reads as logged out and
/// is never surfaced to the user.
pub async fn fetch_auth_status() -> bool {
    let resp = match credentialed_get(&api_url("/api/auth/status")).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("auth status probe failed: {e}");
            return false;
        }
    };

    match resp.bytes().await {
        Ok(body) => decode_auth_status(&body),
        Err(e) => {
            tracing::warn!("auth status probe failed: {e}");
            false
        }
    }
}
