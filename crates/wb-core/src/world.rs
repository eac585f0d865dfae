//! The world model: a validated graph of named locations.

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::Location;

/// The central world model. Owns every location and its live, mutable
/// object list and move table for the duration of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct World {
    locations: BTreeMap<String, Location>,
}

impl World {
    /// Build a world from a set of locations, validating every edge.
    pub fn new(locations: BTreeMap<String, Location>) -> CoreResult<Self> {
        let world = Self { locations };
        world.validate()?;
        Ok(world)
    }

    /// Parse a world from template JSON and validate it.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let locations: BTreeMap<String, Location> = serde_json::from_str(json)?;
        Self::new(locations)
    }

    /// Read and parse a world template file.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Every edge destination must name a location in this world. A
    /// dangling edge is a load-time error, never a runtime one.
    fn validate(&self) -> CoreResult<()> {
        for (name, location) in &self.locations {
            for (direction, target) in &location.moves {
                if !self.locations.contains_key(target) {
                    return Err(CoreError::DanglingEdge {
                        location: name.clone(),
                        direction: direction.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Get a location by name.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Get a mutable location by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    /// Whether a location with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Iterate over all (name, location) pairs in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = (&String, &Location)> {
        self.locations.iter()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Resolve a directional move from `current`.
    ///
    /// Returns the edge target when `direction` is an edge of `current`,
    /// otherwise returns `current` unchanged — movement silently no-ops
    /// rather than erroring.
    pub fn resolve_move<'a>(&'a self, current: &'a str, direction: &str) -> &'a str {
        self.locations
            .get(current)
            .and_then(|location| location.moves.get(direction))
            .map_or(current, String::as_str)
    }

    /// Pick a location name uniformly at random, excluding `exclude`.
    ///
    /// Returns `None` when no candidate remains.
    pub fn random_location_except<R: Rng>(&self, rng: &mut R, exclude: &str) -> Option<&str> {
        let candidates: Vec<&str> = self
            .locations
            .keys()
            .map(String::as_str)
            .filter(|name| *name != exclude)
            .collect();
        candidates.choose(rng).copied()
    }

    /// Replace a location's object list wholesale. Names not present in the
    /// world are ignored.
    pub fn override_objects(&mut self, name: &str, objects: Vec<crate::item::Item>) {
        if let Some(location) = self.locations.get_mut(name) {
            location.objects = objects;
        }
    }

    /// Merge edges into a location's move table. Existing directions are
    /// overwritten, template edges not named here are preserved.
    pub fn merge_moves(&mut self, name: &str, moves: &BTreeMap<String, String>) {
        if let Some(location) = self.locations.get_mut(name) {
            for (direction, destination) in moves {
                location
                    .moves
                    .insert(direction.clone(), destination.clone());
            }
        }
    }
}
