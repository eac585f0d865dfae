//! The game session state machine.
//!
//! A `GameSession` exclusively owns the live, mutable world and inventory
//! for one run. It applies one command per turn, consults the access
//! policy before resolving movement, and pushes a snapshot to the save
//! store after every successful move and pickup. Each transition either
//! fully applies, persistence included, or fully no-ops.

use rand::SeedableRng;
use rand::rngs::StdRng;

use wb_core::{CoreError, Location, World};

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::policy::{Access, AccessPolicy};
use crate::save::{ResumeDecision, SaveRecord, SessionFlags};
use crate::store::SaveStore;

/// Items that earn a flavor line when picked up, keyed by lowercase name.
const SPECIAL_FINDS: &[(&str, &str)] = &[
    ("odm gear", "With this gear, you can now travel beyond the walls!"),
    ("thunder spear", "This powerful weapon will help you fight titans!"),
    (
        "mysterious vial",
        "You feel a strange power emanating from this vial...",
    ),
    (
        "expedition map",
        "This detailed map will help you navigate hidden paths!",
    ),
];

/// Static command help, also shown by the CLI's HOW TO PLAY banner.
pub const HELP_TEXT: &str = "\
Commands:
  [direction] - Move in that direction (e.g., north, south)
  special directions - Some locations have special moves (climb, tunnel)
  pickup - Pick up the first special item in the room
  look - Examine your current location again
  inventory - Check your items
  help - Show this help information
  exit/quit - Exit the game";

/// The session's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting commands.
    Playing,
    /// The win condition fired; terminal.
    Won,
}

/// How this session started, for the caller's welcome banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartReport {
    /// Brand new player at a random location.
    NewExplorer,
    /// An unfinished session was resumed exactly.
    Resumed {
        /// Number of items in the resumed inventory.
        items: usize,
    },
    /// A past winner starting over at a random location.
    FreshAfterWin,
}

/// Result of the win check run at the top of every loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinCheck {
    /// Both conditions met; the session is over. Carries the victory text.
    Won(String),
    /// At the finish location without the required item; play continues.
    Partial(String),
    /// Not at the finish location.
    Playing,
}

/// Output of one processed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Banner heading for this turn.
    pub heading: String,
    /// Body text.
    pub text: String,
    /// The player asked to end the session.
    pub quit: bool,
}

impl Turn {
    fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
            quit: false,
        }
    }
}

/// An interactive game session over an injected save store.
pub struct GameSession<S: SaveStore> {
    world: World,
    username: String,
    location: String,
    inventory: Vec<String>,
    flags: SessionFlags,
    policy: AccessPolicy,
    config: GameConfig,
    store: S,
    state: SessionState,
}

impl<S: SaveStore> GameSession<S> {
    /// Start a session for `username`.
    ///
    /// Loads the user's record from the store and resolves the three-way
    /// resume decision: an unfinished record resumes exactly (location,
    /// inventory, flags, and world delta); a won record or no record at
    /// all starts fresh at a random non-finish location. A resumed
    /// location the template no longer has is treated like a corrupt
    /// record: fresh start, no crash.
    pub fn start(
        mut world: World,
        username: impl Into<String>,
        config: GameConfig,
        policy: AccessPolicy,
        store: S,
    ) -> GameResult<(Self, StartReport)> {
        let username = username.into();

        let decision = match ResumeDecision::decide(store.load(&username)?) {
            ResumeDecision::Resume(record) if !world.contains(&record.location) => {
                ResumeDecision::FreshStart
            }
            decision => decision,
        };

        let fresh_start = |world: &World, report: StartReport| -> GameResult<_> {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let location = world
                .random_location_except(&mut rng, &config.finish)
                .ok_or(GameError::NoStartLocation)?
                .to_string();
            Ok((location, Vec::new(), SessionFlags::new(), report))
        };

        let (location, inventory, flags, report) = match decision {
            ResumeDecision::Resume(record) => {
                record.apply_world_delta(&mut world);
                let report = StartReport::Resumed {
                    items: record.inventory.len(),
                };
                (
                    record.location,
                    record.inventory,
                    record.game_state,
                    report,
                )
            }
            ResumeDecision::FreshStart => fresh_start(&world, StartReport::NewExplorer)?,
            ResumeDecision::FreshAfterWin => fresh_start(&world, StartReport::FreshAfterWin)?,
        };

        let session = Self {
            world,
            username,
            location,
            inventory,
            flags,
            policy,
            config,
            store,
            state: SessionState::Playing,
        };
        Ok((session, report))
    }

    /// The player's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The current location name.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Held item names in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The session flags.
    pub fn flags(&self) -> &SessionFlags {
        &self.flags
    }

    /// The lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The live world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The injected save store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The current location display: name line plus full description.
    pub fn display_location(&self) -> GameResult<String> {
        let location = self.current()?;
        Ok(format!("Location: {}\n{}", self.location, location.describe()))
    }

    /// Evaluate the win condition. Run this at the top of every loop
    /// iteration, before reading a command.
    ///
    /// Winning requires both conditions at once: standing at the finish
    /// location while holding the required item. The finish without the
    /// item yields a partial-discovery nudge and play continues.
    pub fn check_win(&mut self) -> GameResult<WinCheck> {
        if self.state == SessionState::Won || self.location != self.config.finish {
            return Ok(WinCheck::Playing);
        }

        if self.holds(&self.config.required_item) {
            self.flags.set_won();
            if let Err(e) = self.persist() {
                self.flags.clear_won();
                return Err(e);
            }
            self.state = SessionState::Won;
            Ok(WinCheck::Won(
                "Congratulations! You've discovered the secrets of the titans \
                 and collected the crucial journals!\n\
                 You now understand the truth about the world beyond the walls!"
                    .to_string(),
            ))
        } else {
            Ok(WinCheck::Partial(format!(
                "You've found {}, but without {}, the secrets remain hidden.\n\
                 Keep exploring to find the full truth!",
                self.config.finish, self.config.required_item
            )))
        }
    }

    /// Apply one command line and produce the turn's output.
    pub fn process(&mut self, input: &str) -> GameResult<Turn> {
        let command = parse_command(input, self.current()?);

        match command {
            Command::Empty => Ok(Turn::new("LOCATION UPDATE", self.display_location()?)),
            Command::Move(direction) => self.do_move(&direction),
            Command::UnknownDirection(direction) => Ok(Turn::new(
                "INVALID DIRECTION",
                format!(
                    "You can't go {direction} from here.\n\n{}",
                    self.display_location()?
                ),
            )),
            Command::Quit => self.do_quit(),
            Command::Help => Ok(Turn::new(
                "HELP INFORMATION",
                format!("{HELP_TEXT}\n\n{}", self.display_location()?),
            )),
            Command::Inventory => Ok(Turn::new(
                "INVENTORY CONTENTS",
                format!("{}\n\n{}", self.inventory_listing(), self.display_location()?),
            )),
            Command::Pickup => self.do_pickup(),
            Command::Look => Ok(Turn::new("LOCATION DETAILS", self.display_location()?)),
            Command::Unknown(text) => Ok(Turn::new(
                "INVALID COMMAND",
                format!(
                    "I don't understand '{text}'. Type 'help' for assistance.\n\n{}",
                    self.display_location()?
                ),
            )),
        }
    }

    fn do_move(&mut self, direction: &str) -> GameResult<Turn> {
        let heading = format!("MOVING: {}", direction.to_uppercase());

        match self.policy.evaluate(&self.location, direction, &self.inventory) {
            Access::Denied(reason) => Ok(Turn::new(heading, reason)),
            Access::Allowed => {
                let destination = self.world.resolve_move(&self.location, direction).to_string();

                // Snapshot with the destination first; the location only
                // changes once the save has landed.
                let record =
                    SaveRecord::capture(&destination, &self.inventory, &self.flags, &self.world);
                self.store.save(&self.username, &record)?;

                self.location = destination;
                Ok(Turn::new(heading, self.display_location()?))
            }
        }
    }

    fn do_pickup(&mut self) -> GameResult<Turn> {
        let here = self.current()?;
        if here.objects.is_empty() {
            return Ok(Turn::new(
                "EMPTY ROOM",
                format!(
                    "There is nothing here to pick up.\n\n{}",
                    self.display_location()?
                ),
            ));
        }

        let Some(index) = here.first_pickable_index() else {
            return Ok(Turn::new(
                "ITEM COLLECTION",
                format!(
                    "There are no special items to pick up here.\n\n{}",
                    self.display_location()?
                ),
            ));
        };

        let item = self.current_mut()?.objects.remove(index);
        self.inventory.push(item.name.clone());

        if let Err(e) = self.persist() {
            // Roll the turn back; the transition must not half-apply.
            self.inventory.pop();
            self.current_mut()?.objects.insert(index, item);
            return Err(e);
        }

        let mut text = format!("You picked up: {}", item.name);
        if let Some(flavor) = flavor_line(&item.name) {
            text.push('\n');
            text.push_str(flavor);
        }
        text.push_str("\n\n");
        text.push_str(&self.display_location()?);
        Ok(Turn::new("ITEM COLLECTION", text))
    }

    fn do_quit(&mut self) -> GameResult<Turn> {
        if self.config.save_on_quit {
            self.persist()?;
        }
        let mut turn = Turn::new("GAME ENDING", "Thanks for playing!");
        turn.quit = true;
        Ok(turn)
    }

    fn inventory_listing(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut out = "You are carrying:".to_string();
        for item in &self.inventory {
            out.push_str(&format!("\n- {item}"));
        }
        out
    }

    fn holds(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    fn persist(&mut self) -> GameResult<()> {
        let record =
            SaveRecord::capture(&self.location, &self.inventory, &self.flags, &self.world);
        self.store.save(&self.username, &record)
    }

    fn current(&self) -> GameResult<&Location> {
        self.world
            .get(&self.location)
            .ok_or_else(|| GameError::Core(CoreError::UnknownLocation(self.location.clone())))
    }

    fn current_mut(&mut self) -> GameResult<&mut Location> {
        let name = self.location.clone();
        self.world
            .get_mut(&self.location)
            .ok_or(GameError::Core(CoreError::UnknownLocation(name)))
    }
}

/// Flavor line for a notable item, matched case-insensitively.
fn flavor_line(item_name: &str) -> Option<&'static str> {
    let lower = item_name.to_lowercase();
    SPECIAL_FINDS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, line)| *line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const TEMPLATE: &str = r#"{
        "Recruit Training Camp": {
            "text": "You stand on the dusty training grounds.",
            "moves": {
                "north": "Interior Wall Research Lab",
                "east": "Shiganshina District"
            },
            "objects": [
                {"name": "training dummy", "type": "tool"},
                {"name": "wooden sword", "type": "weapon"}
            ]
        },
        "Interior Wall Research Lab": {
            "text": "Workbenches covered in gear prototypes.",
            "moves": {"south": "Recruit Training Camp"},
            "objects": [{"name": "ODM gear", "type": "equipment"}]
        },
        "Shiganshina District": {
            "text": "Quiet streets inside the broken gate.",
            "moves": {
                "west": "Recruit Training Camp",
                "south": "Titan Forest",
                "inside": "Eren's Basement"
            }
        },
        "Titan Forest": {
            "text": "Trees taller than the walls.",
            "moves": {
                "north": "Shiganshina District",
                "tunnel": "Survey Corps HQ"
            },
            "objects": [{"name": "expedition map", "type": "document"}]
        },
        "Survey Corps HQ": {
            "text": "Maps and supply crates everywhere.",
            "moves": {"tunnel": "Titan Forest"},
            "objects": [{"name": "Grisha's journals", "type": "document"}]
        },
        "Eren's Basement": {
            "text": "A locked room below the house.",
            "moves": {"outside": "Shiganshina District"},
            "objects": [{"name": "dusty desk", "type": "furniture"}]
        }
    }"#;

    fn test_world() -> World {
        World::from_json_str(TEMPLATE).unwrap()
    }

    fn test_policy() -> AccessPolicy {
        // Only the tunnel gate matters for this map.
        let mut policy = AccessPolicy::empty();
        policy.push(crate::policy::AccessRule::new(
            "Titan Forest",
            "tunnel",
            "expedition map",
            "You need an expedition map to navigate the secret tunnel!",
        ));
        policy
    }

    /// A session resumed at a known location, for deterministic tests.
    fn session_at(location: &str) -> GameSession<MemoryStore> {
        let world = test_world();
        let mut store = MemoryStore::new();
        store.insert(
            "eren",
            SaveRecord::capture(location, &[], &SessionFlags::new(), &world),
        );
        let (session, report) = GameSession::start(
            world,
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            store,
        )
        .unwrap();
        assert_eq!(report, StartReport::Resumed { items: 0 });
        session
    }

    #[test]
    fn fresh_start_is_random_non_finish() {
        for seed in 0..20 {
            let (session, report) = GameSession::start(
                test_world(),
                "eren",
                GameConfig::default().with_seed(seed),
                test_policy(),
                MemoryStore::new(),
            )
            .unwrap();
            assert_eq!(report, StartReport::NewExplorer);
            assert_ne!(session.location(), "Eren's Basement");
            assert!(session.inventory().is_empty());
        }
    }

    #[test]
    fn no_start_candidate_is_an_error() {
        let world = World::from_json_str(r#"{"Eren's Basement": {"text": "x"}}"#).unwrap();
        let result = GameSession::start(
            world,
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            MemoryStore::new(),
        );
        assert!(matches!(result, Err(GameError::NoStartLocation)));
    }

    #[test]
    fn move_updates_location_and_persists() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("north").unwrap();

        assert_eq!(turn.heading, "MOVING: NORTH");
        assert_eq!(session.location(), "Interior Wall Research Lab");
        assert!(turn.text.contains("Location: Interior Wall Research Lab"));

        let saved = session.store().load("eren").unwrap().unwrap();
        assert_eq!(saved.location, "Interior Wall Research Lab");
    }

    #[test]
    fn denied_move_mutates_nothing() {
        let mut session = session_at("Titan Forest");
        let before = session.store().load("eren").unwrap().unwrap();

        let turn = session.process("tunnel").unwrap();
        assert_eq!(
            turn.text,
            "You need an expedition map to navigate the secret tunnel!"
        );
        assert_eq!(session.location(), "Titan Forest");
        assert!(session.inventory().is_empty());
        // No snapshot was pushed either.
        assert_eq!(session.store().load("eren").unwrap().unwrap(), before);
    }

    #[test]
    fn gated_move_allowed_with_item() {
        let mut session = session_at("Titan Forest");
        session.process("pickup").unwrap();
        assert_eq!(session.inventory(), ["expedition map"]);

        session.process("tunnel").unwrap();
        assert_eq!(session.location(), "Survey Corps HQ");
    }

    #[test]
    fn known_direction_without_edge() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("south").unwrap();
        assert_eq!(turn.heading, "INVALID DIRECTION");
        assert!(turn.text.contains("You can't go south from here."));
        assert_eq!(session.location(), "Recruit Training Camp");
    }

    #[test]
    fn unknown_command_reports_invalid() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("dance wildly").unwrap();
        assert_eq!(turn.heading, "INVALID COMMAND");
        assert!(turn.text.contains("I don't understand 'dance wildly'."));
    }

    #[test]
    fn empty_input_redisplays() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("   ").unwrap();
        assert_eq!(turn.heading, "LOCATION UPDATE");
        assert!(turn.text.contains("dusty training grounds"));
        assert!(!turn.quit);
    }

    #[test]
    fn pickup_takes_first_pickable_only() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("pickup").unwrap();

        assert!(turn.text.contains("You picked up: training dummy"));
        assert_eq!(session.inventory(), ["training dummy"]);
        let remaining = &session.world().get("Recruit Training Camp").unwrap().objects;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "wooden sword");

        // The snapshot reflects the removal.
        let saved = session.store().load("eren").unwrap().unwrap();
        assert_eq!(saved.inventory, ["training dummy"]);
        assert_eq!(saved.picked_up_objects["Recruit Training Camp"].len(), 1);
    }

    #[test]
    fn pickup_drains_then_reports_empty() {
        let mut session = session_at("Recruit Training Camp");
        session.process("pickup").unwrap();
        session.process("pickup").unwrap();
        assert_eq!(session.inventory().len(), 2);

        let turn = session.process("pickup").unwrap();
        assert_eq!(turn.heading, "EMPTY ROOM");
        assert!(turn.text.contains("There is nothing here to pick up."));
        assert_eq!(session.inventory().len(), 2);
    }

    #[test]
    fn pickup_ignores_rooted_items() {
        let mut session = session_at("Eren's Basement");
        let turn = session.process("pickup").unwrap();
        assert_eq!(turn.heading, "ITEM COLLECTION");
        assert!(turn.text.contains("There are no special items to pick up here."));
        // The desk stays put.
        let basement = session.world().get("Eren's Basement").unwrap();
        assert_eq!(basement.objects.len(), 1);
    }

    #[test]
    fn pickup_emits_flavor_for_special_finds() {
        let mut session = session_at("Interior Wall Research Lab");
        let turn = session.process("pickup").unwrap();
        assert!(turn.text.contains("You picked up: ODM gear"));
        assert!(
            turn.text
                .contains("With this gear, you can now travel beyond the walls!")
        );
    }

    #[test]
    fn inventory_listing_orders_and_duplicates() {
        let mut session = session_at("Recruit Training Camp");
        let turn = session.process("inventory").unwrap();
        assert!(turn.text.contains("Your inventory is empty."));

        session.process("pickup").unwrap();
        session.process("pickup").unwrap();
        let turn = session.process("inventory").unwrap();
        assert!(turn.text.contains("You are carrying:\n- training dummy\n- wooden sword"));
    }

    #[test]
    fn help_and_look() {
        let mut session = session_at("Recruit Training Camp");
        let help = session.process("help").unwrap();
        assert_eq!(help.heading, "HELP INFORMATION");
        assert!(help.text.contains("exit/quit - Exit the game"));

        let look = session.process("look").unwrap();
        assert_eq!(look.heading, "LOCATION DETAILS");
        assert!(look.text.contains("dusty training grounds"));
    }

    #[test]
    fn quit_does_not_save_by_default() {
        // A fresh start is only persisted by the first move or pickup, so a
        // straight quit leaves no record behind.
        let (mut session, _) = GameSession::start(
            test_world(),
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            MemoryStore::new(),
        )
        .unwrap();

        let turn = session.process("quit").unwrap();
        assert!(turn.quit);
        assert_eq!(turn.text, "Thanks for playing!");
        assert!(session.store().load("eren").unwrap().is_none());
    }

    #[test]
    fn quit_saves_when_configured() {
        let (mut session, _) = GameSession::start(
            test_world(),
            "eren",
            GameConfig::default().with_seed(1).with_save_on_quit(true),
            test_policy(),
            MemoryStore::new(),
        )
        .unwrap();
        let start = session.location().to_string();

        session.process("quit").unwrap();
        let saved = session.store().load("eren").unwrap().unwrap();
        assert_eq!(saved.location, start);
    }

    #[test]
    fn win_requires_both_conditions() {
        let mut session = session_at("Eren's Basement");
        // At the finish without the journals: partial discovery only.
        match session.check_win().unwrap() {
            WinCheck::Partial(text) => {
                assert!(text.contains("the secrets remain hidden"));
            }
            other => panic!("expected partial discovery, got {other:?}"),
        }
        assert_eq!(session.state(), SessionState::Playing);
        assert!(!session.flags().won());

        // Still accepts commands.
        let turn = session.process("look").unwrap();
        assert_eq!(turn.heading, "LOCATION DETAILS");
    }

    #[test]
    fn win_away_from_finish_is_playing() {
        let mut session = session_at("Recruit Training Camp");
        assert_eq!(session.check_win().unwrap(), WinCheck::Playing);
    }

    #[test]
    fn full_victory_path() {
        let mut session = session_at("Titan Forest");
        session.process("pickup").unwrap(); // expedition map
        session.process("tunnel").unwrap();
        session.process("pickup").unwrap(); // Grisha's journals
        session.process("tunnel").unwrap();
        session.process("north").unwrap();
        session.process("inside").unwrap();
        assert_eq!(session.location(), "Eren's Basement");

        match session.check_win().unwrap() {
            WinCheck::Won(text) => assert!(text.contains("Congratulations!")),
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(session.state(), SessionState::Won);

        let saved = session.store().load("eren").unwrap().unwrap();
        assert!(saved.game_state.won());
        assert_eq!(saved.location, "Eren's Basement");
    }

    #[test]
    fn won_record_starts_fresh_elsewhere() {
        let world = test_world();
        let mut flags = SessionFlags::new();
        flags.set_won();
        let mut store = MemoryStore::new();
        store.insert(
            "eren",
            SaveRecord::capture(
                "Eren's Basement",
                &["Grisha's journals".to_string()],
                &flags,
                &world,
            ),
        );

        let (session, report) = GameSession::start(
            world,
            "eren",
            GameConfig::default().with_seed(5),
            test_policy(),
            store,
        )
        .unwrap();
        assert_eq!(report, StartReport::FreshAfterWin);
        assert_ne!(session.location(), "Eren's Basement");
        assert!(session.inventory().is_empty());
        assert!(!session.flags().won());
    }

    #[test]
    fn resume_reconstructs_world_mutations() {
        let mut session = session_at("Recruit Training Camp");
        session.process("pickup").unwrap();
        session.process("north").unwrap();
        let store = session.store().clone();

        let (resumed, report) = GameSession::start(
            test_world(),
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            store,
        )
        .unwrap();
        assert_eq!(report, StartReport::Resumed { items: 1 });
        assert_eq!(resumed.location(), "Interior Wall Research Lab");
        assert_eq!(resumed.inventory(), ["training dummy"]);
        assert_eq!(resumed.world(), session.world());
    }

    #[test]
    fn resume_at_vanished_location_falls_back_to_fresh() {
        let world = test_world();
        let mut store = MemoryStore::new();
        store.insert(
            "eren",
            SaveRecord::capture("Demolished District", &[], &SessionFlags::new(), &world),
        );
        let (session, report) = GameSession::start(
            world,
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            store,
        )
        .unwrap();
        assert_eq!(report, StartReport::NewExplorer);
        assert!(session.world().contains(session.location()));
    }

    #[test]
    fn unlocked_edges_survive_resume() {
        // Unlock the tunnel into the forest move table, save, resume, and
        // the edge is still traversable from the snapshot alone.
        let mut session = session_at("Titan Forest");
        session.process("pickup").unwrap();
        session.process("tunnel").unwrap();
        let store = session.store().clone();

        let (mut resumed, _) = GameSession::start(
            test_world(),
            "eren",
            GameConfig::default().with_seed(1),
            test_policy(),
            store,
        )
        .unwrap();
        assert_eq!(resumed.location(), "Survey Corps HQ");
        resumed.process("tunnel").unwrap();
        assert_eq!(resumed.location(), "Titan Forest");
    }

    #[test]
    fn flavor_lines_match_case_insensitively() {
        assert!(flavor_line("ODM gear").is_some());
        assert!(flavor_line("Thunder Spear").is_some());
        assert!(flavor_line("wooden sword").is_none());
    }
}
