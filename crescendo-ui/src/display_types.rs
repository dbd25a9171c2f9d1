//! Display types for UI components
//!
//! Lightweight versions of the backend's wire types, containing only the
//! fields needed for display. They keep the view components independent of
//! the JSON envelope shapes.

/// Listener profile display info
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub display_name: String,
    pub follower_count: i64,
    pub image_url: Option<String>,
}

/// Artist display info
#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

/// Track display info
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// First credited artist, "Unknown Artist" when the credit is missing
    pub artist_name: String,
}
