//! Subcommand implementations.

/// Run an interactive game session.
pub mod play;
