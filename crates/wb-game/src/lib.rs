//! The Wallbound game engine: session state machine, access rules, command
//! parsing, and the save store.
//!
//! The [`GameSession`] owns the live world and inventory for one run,
//! consults the [`AccessPolicy`] before resolving any move, and pushes a
//! [`SaveRecord`] into an injected [`SaveStore`] after every successful
//! move and pickup so a session can resume exactly where it left off.

/// Command parsing for player input.
pub mod command;
/// Configuration for a game session.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Access rules gating movement on inventory contents.
pub mod policy;
/// Durable session snapshots and the resume decision.
pub mod save;
/// The game session state machine.
pub mod session;
/// Save stores: durable and in-memory mappings from username to record.
pub mod store;

/// Re-export command parsing.
pub use command::{Command, DIRECTION_KEYWORDS, parse_command};
/// Re-export session configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export the access policy.
pub use policy::{Access, AccessPolicy, AccessRule};
/// Re-export save types.
pub use save::{ResumeDecision, SaveRecord, SessionFlags};
/// Re-export the session state machine.
pub use session::{GameSession, HELP_TEXT, SessionState, StartReport, Turn, WinCheck};
/// Re-export the save stores.
pub use store::{JsonFileStore, MemoryStore, SaveStore};
