//! Core types for Wallbound: items, locations, and the world model.
//!
//! This crate owns the static-shaped world graph loaded from a JSON
//! template and the primitives a game session mutates at runtime: object
//! lists that shrink on pickup and move tables that grow from persisted
//! unlocks. It knows nothing about commands, saves, or the player.

/// Error types used throughout the crate.
pub mod error;
/// Items found in locations and carried in inventories.
pub mod item;
/// Locations: narrative text, outgoing edges, and resident items.
pub mod location;
/// The world model: a validated graph of named locations.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export the location type.
pub use location::Location;
/// Re-export the world model.
pub use world::World;
