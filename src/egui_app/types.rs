/**
 * Shared Types Module
 *
 * Screen identifiers, navigation routes and the shell's top-level view.
 */

use std::fmt;
use std::str::FromStr;

use crate::shared::SharedError;

/// Every screen the loader knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    GodSelection,
    CharacterCreation,
    Castle,
    Settings,
}

impl ScreenId {
    pub const ALL: [ScreenId; 4] = [
        ScreenId::GodSelection,
        ScreenId::CharacterCreation,
        ScreenId::Castle,
        ScreenId::Settings,
    ];

    /// Stable string key of the screen.
    pub fn key(self) -> &'static str {
        match self {
            ScreenId::GodSelection => "god_selection",
            ScreenId::CharacterCreation => "character_creation",
            ScreenId::Castle => "castle",
            ScreenId::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScreenId::GodSelection => "Choose Your God",
            ScreenId::CharacterCreation => "Create a Character",
            ScreenId::Castle => "Castle",
            ScreenId::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScreenId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| SharedError::unknown("screen", s))
    }
}

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login form; the session is already gone
    Login,
    /// Whatever screen the player's progression calls for
    Home,
    Screen(ScreenId),
}

/// Current top-level view of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Startup: restoring and validating a stored session
    Booting,
    /// Login/registration form
    Auth,
    /// A screen is mounted in the container
    Screen,
}
