//! Store types for UI state management
//!
//! View-local state that pages resolve into. Each mount starts from
//! `Default` and owns its store for the life of the mount.

pub mod dashboard;

pub use dashboard::*;
