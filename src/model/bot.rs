use std::fmt;

/// Display-only bot state. Nothing else in the dashboard reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotStatus {
    #[default]
    Active,
    Stopped,
}

impl BotStatus {
    pub fn is_active(self) -> bool {
        matches!(self, BotStatus::Active)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            BotStatus::Active => BotStatus::Stopped,
            BotStatus::Stopped => BotStatus::Active,
        };
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            BotStatus::Active => "Bot active",
            BotStatus::Stopped => "Bot stopped",
        }
    }

    /// Label of the button, i.e. the action a press performs.
    pub fn action_label(self) -> &'static str {
        match self {
            BotStatus::Active => "Stop",
            BotStatus::Stopped => "Start",
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStatus::Active => write!(f, "active"),
            BotStatus::Stopped => write!(f, "stopped"),
        }
    }
}
