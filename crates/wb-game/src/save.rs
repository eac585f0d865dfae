//! Durable session snapshots and the resume decision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wb_core::{Item, World};

/// Named boolean session flags. Only `won` is consumed by the core logic;
/// everything else rides along untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionFlags {
    flags: BTreeMap<String, bool>,
}

impl SessionFlags {
    /// Empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session has been won.
    pub fn won(&self) -> bool {
        self.flags.get("won").copied().unwrap_or(false)
    }

    /// Mark the session as won.
    pub fn set_won(&mut self) {
        self.flags.insert("won".to_string(), true);
    }

    /// Clear the won flag.
    pub fn clear_won(&mut self) {
        self.flags.remove("won");
    }

    /// Set an arbitrary flag.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }

    /// Read an arbitrary flag; absent flags read as false.
    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// The durable snapshot of one user's session, sufficient to resume play
/// exactly. Overwritten in full on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Current location name.
    pub location: String,
    /// Held item names in pickup order; duplicates permitted.
    pub inventory: Vec<String>,
    /// Session flags, minimally `won`.
    pub game_state: SessionFlags,
    /// Authoritative object list per location, recording what remains
    /// after pickups.
    pub picked_up_objects: BTreeMap<String, Vec<Item>>,
    /// Authoritative move table per location, recording unlocked passages.
    pub custom_paths: BTreeMap<String, BTreeMap<String, String>>,
}

impl SaveRecord {
    /// Snapshot the live session state. Every location's object list and
    /// move table is captured, so re-applying the record to a fresh
    /// template reconstructs the world exactly.
    pub fn capture(
        location: &str,
        inventory: &[String],
        flags: &SessionFlags,
        world: &World,
    ) -> Self {
        let mut picked_up_objects = BTreeMap::new();
        let mut custom_paths = BTreeMap::new();
        for (name, loc) in world.locations() {
            picked_up_objects.insert(name.clone(), loc.objects.clone());
            custom_paths.insert(name.clone(), loc.moves.clone());
        }
        Self {
            location: location.to_string(),
            inventory: inventory.to_vec(),
            game_state: flags.clone(),
            picked_up_objects,
            custom_paths,
        }
    }

    /// Apply this record's world delta to a freshly loaded template:
    /// object lists are replaced wholesale, move tables are merged.
    /// Locations the template no longer has are skipped.
    pub fn apply_world_delta(&self, world: &mut World) {
        for (name, objects) in &self.picked_up_objects {
            world.override_objects(name, objects.clone());
        }
        for (name, moves) in &self.custom_paths {
            world.merge_moves(name, moves);
        }
    }
}

/// How to start a session given whatever record the store holds.
///
/// An unfinished record resumes where it left off; a won record starts
/// fresh at a random location (the finish's secrets are already known), as
/// does having no record at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeDecision {
    /// No record: brand new player, random start.
    FreshStart,
    /// Unfinished record: resume it exactly.
    Resume(Box<SaveRecord>),
    /// Won record: returning winner, random start.
    FreshAfterWin,
}

impl ResumeDecision {
    /// Decide from the store's answer for this user.
    pub fn decide(record: Option<SaveRecord>) -> Self {
        match record {
            None => Self::FreshStart,
            Some(rec) if rec.game_state.won() => Self::FreshAfterWin,
            Some(rec) => Self::Resume(Box::new(rec)),
        }
    }
}
