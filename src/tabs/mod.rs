use serde::{Deserialize, Serialize};

/// Panel identifier for type-safe tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    General,
    Booking,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::General => "general",
            Tab::Booking => "booking",
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "general" => Ok(Tab::General),
            "booking" => Ok(Tab::Booking),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which panel is currently visible. Exactly one tab is active at any
/// time by construction: the selection is a single field, and
/// `activate` always overwrites it rather than toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    active: Tab,
}

impl TabSelection {
    pub fn new() -> Self {
        Self {
            active: Tab::General,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Activate a tab unconditionally. Returns whether the selection
    /// changed; re-activating the active tab is a harmless no-op.
    pub fn activate(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}

impl Default for TabSelection {
    fn default() -> Self {
        Self::new()
    }
}
