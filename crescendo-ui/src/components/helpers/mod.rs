pub mod error_display;
pub mod loading_indicator;

pub use error_display::*;
pub use loading_indicator::*;
