pub mod dashboard;
pub mod helpers;
pub mod landing;
pub mod navbar;

pub use dashboard::*;
pub use helpers::*;
pub use landing::*;
pub use navbar::*;
