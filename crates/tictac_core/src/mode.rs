//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game mode - who is the opponent?
///
/// Defaults to [`GameMode::HumanVsHuman`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    HumanVsHuman,
    /// The human plays X against the computer playing O.
    HumanVsAi,
}

impl GameMode {
    /// Maps the AI-enabled flag to a mode.
    pub fn from_ai_enabled(ai_enabled: bool) -> Self {
        if ai_enabled {
            Self::HumanVsAi
        } else {
            Self::HumanVsHuman
        }
    }

    /// Returns true when the computer opponent is active.
    pub fn is_ai(self) -> bool {
        self == Self::HumanVsAi
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        Self::from_ai_enabled(!self.is_ai())
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsAi => "Human vs AI",
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Play vs AI",
            Self::HumanVsAi => "Play vs Friend",
        }
    }
}
