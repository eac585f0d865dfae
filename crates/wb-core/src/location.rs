//! Locations: narrative text, outgoing edges, and resident items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A node in the world graph.
///
/// Moves are kept in a `BTreeMap` so that both the rendered option list and
/// the serialized save form iterate in a stable, sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Narrative text shown when the location is described.
    pub text: String,
    /// Outgoing edges: direction word to destination location name.
    #[serde(default)]
    pub moves: BTreeMap<String, String>,
    /// Items currently present, in stored order.
    #[serde(default)]
    pub objects: Vec<Item>,
}

impl Location {
    /// Compose the full description of this location: narrative text, an
    /// item sentence when objects are present, a pickup hint when any of
    /// them is pickable, and the enumerated list of exits.
    pub fn describe(&self) -> String {
        let mut description = self.text.clone();
        description.push('\n');

        if !self.objects.is_empty() {
            let names: Vec<&str> = self.objects.iter().map(|o| o.name.as_str()).collect();
            match names.as_slice() {
                [only] => description.push_str(&format!("You see {only}.")),
                [rest @ .., last] => {
                    description.push_str(&format!("You see {} and {last}.", rest.join(", ")));
                }
                [] => unreachable!(),
            }

            if self.objects.iter().any(Item::is_pickable) {
                description.push_str("\n(You can type 'pickup' to collect items)");
            }
        }

        description.push_str("\n\nYour options are:");
        for (direction, destination) in &self.moves {
            description.push_str(&format!("\n'{direction}' to go to {destination}"));
        }

        description
    }

    /// Index of the first pickable item, if any.
    pub fn first_pickable_index(&self) -> Option<usize> {
        self.objects.iter().position(Item::is_pickable)
    }

    /// Remove and return the first pickable item in stored order.
    ///
    /// Non-pickable items are left untouched; returns `None` when nothing
    /// here can be picked up.
    pub fn take_first_pickable(&mut self) -> Option<Item> {
        let index = self.first_pickable_index()?;
        Some(self.objects.remove(index))
    }
}
