//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The location that ends the game when reached with the required item.
    pub finish: String,
    /// The item that must be held at the finish to win.
    pub required_item: String,
    /// Persist a snapshot on quit as well as on moves and pickups.
    pub save_on_quit: bool,
    /// RNG seed for a reproducible fresh-start location; `None` draws from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            finish: "Eren's Basement".to_string(),
            required_item: "Grisha's journals".to_string(),
            save_on_quit: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the finish location.
    pub fn with_finish(mut self, finish: impl Into<String>) -> Self {
        self.finish = finish.into();
        self
    }

    /// Set the item required to win.
    pub fn with_required_item(mut self, item: impl Into<String>) -> Self {
        self.required_item = item.into();
        self
    }

    /// Also persist a snapshot when the player quits.
    pub fn with_save_on_quit(mut self, save_on_quit: bool) -> Self {
        self.save_on_quit = save_on_quit;
        self
    }

    /// Set the RNG seed for the fresh-start location draw.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
