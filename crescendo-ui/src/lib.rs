//! crescendo-ui - Shared UI types and components for crescendo
//!
//! Contains display types, stores, and pure view components rendered by the
//! web app. Nothing in here performs I/O; every interaction surfaces as an
//! `EventHandler` callback wired by the caller.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
