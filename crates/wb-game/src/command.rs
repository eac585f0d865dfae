//! Command parsing for player input.
//!
//! Classification is location-aware: a single token that names an outgoing
//! edge of the current location is always a move, even when it collides
//! with a verb. Everything is tokenized on whitespace and case-folded.

use wb_core::Location;

/// Direction words the parser recognizes even when the current location has
/// no such edge, so the player gets "can't go" instead of "invalid command".
pub const DIRECTION_KEYWORDS: &[&str] = &[
    "north", "south", "east", "west", "up", "down", "inside", "outside",
];

/// Verb synonyms. Each matches on the first token of the input.
const QUIT_VERBS: &[&str] = &["exit", "quit"];

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input: redisplay the current location.
    Empty,
    /// Move along an existing edge of the current location.
    Move(String),
    /// A recognized direction word with no matching edge here.
    UnknownDirection(String),
    /// End the session.
    Quit,
    /// Show command help.
    Help,
    /// List held items.
    Inventory,
    /// Pick up the first pickable item here.
    Pickup,
    /// Redisplay the current location.
    Look,
    /// Anything else; carries the case-folded input.
    Unknown(String),
}

/// Parse one line of input against the player's current location.
pub fn parse_command(input: &str, location: &Location) -> Command {
    let tokens: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();

    let Some(first) = tokens.first() else {
        return Command::Empty;
    };

    // A bare edge name always moves, whatever else it might spell.
    if tokens.len() == 1 {
        if location.moves.contains_key(first) {
            return Command::Move(first.clone());
        }
        if DIRECTION_KEYWORDS.contains(&first.as_str()) {
            return Command::UnknownDirection(first.clone());
        }
    }

    if QUIT_VERBS.contains(&first.as_str()) {
        return Command::Quit;
    }
    match first.as_str() {
        "help" => Command::Help,
        "inventory" => Command::Inventory,
        "pickup" => Command::Pickup,
        "look" => Command::Look,
        _ => Command::Unknown(tokens.join(" ")),
    }
}
