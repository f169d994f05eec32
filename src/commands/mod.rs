//! Command implementations

pub mod show;

pub use show::{fingerprint, handle_show_command, show_fingerprint, Fingerprint};
