//! Access rules gating movement on inventory contents.

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The move may proceed.
    Allowed,
    /// The move is blocked; the string explains why.
    Denied(String),
}

impl Access {
    /// Whether the move may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// A single gated edge: taking `direction` from `location` requires
/// `required_item` to be in the inventory.
#[derive(Debug, Clone)]
pub struct AccessRule {
    /// The location the rule applies to.
    pub location: String,
    /// The direction the rule applies to.
    pub direction: String,
    /// The item that must be held.
    pub required_item: String,
    /// Message shown when the rule denies the move.
    pub denial: String,
}

impl AccessRule {
    /// Create a rule.
    pub fn new(
        location: impl Into<String>,
        direction: impl Into<String>,
        required_item: impl Into<String>,
        denial: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            direction: direction.into(),
            required_item: required_item.into(),
            denial: denial.into(),
        }
    }
}

/// An ordered table of access rules.
///
/// Rules are data, not control flow: the first rule matching the exact
/// (location, direction) pair whose required item is missing denies the
/// move; when no rule matches, access is allowed unconditionally. The
/// check runs before the move is resolved and never mutates anything.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// An empty policy that allows everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the table.
    pub fn push(&mut self, rule: AccessRule) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Check whether moving `direction` from `location` is permitted with
    /// the given inventory.
    pub fn evaluate(&self, location: &str, direction: &str, inventory: &[String]) -> Access {
        for rule in &self.rules {
            if rule.location == location
                && rule.direction == direction
                && !inventory.iter().any(|item| *item == rule.required_item)
            {
                return Access::Denied(rule.denial.clone());
            }
        }
        Access::Allowed
    }
}

impl Default for AccessPolicy {
    /// The shipped gate table: ODM gear guards the routes beyond the walls,
    /// the expedition map guards the secret tunnel.
    fn default() -> Self {
        Self {
            rules: vec![
                AccessRule::new(
                    "Wall Maria Watchtower",
                    "north",
                    "ODM gear",
                    "You need ODM gear to venture outside the walls!",
                ),
                AccessRule::new(
                    "Titan Forest",
                    "climb",
                    "ODM gear",
                    "You need ODM gear to climb up to the Wall!",
                ),
                AccessRule::new(
                    "Titan Forest",
                    "tunnel",
                    "expedition map",
                    "You need an expedition map to navigate the secret tunnel!",
                ),
            ],
        }
    }
}
