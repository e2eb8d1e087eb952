//! Game and rule settings.
//!
//! Settings are plain data with sensible defaults. Hosts that configure the
//! core from text (a menu, a config file, a command line) can go through
//! `GameSettings::set_option`, which mirrors a UCI-style `setoption`.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::DEFAULT_KING_SAFETY_DEPTH;
use crate::move_generation::move_generator::SafetyBudget;

/// Predicate deciding whether a checking move is checkmate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckmateRule {
    /// The checked king has no legal move of its own and the checking move's
    /// destination is not attacked by the checked side.
    #[default]
    KingEscape,
    /// The checked side has no legal move at all.
    NoLegalReply,
}

/// Settings that change how moves are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSettings {
    pub checkmate_rule: CheckmateRule,
    pub king_safety_depth: u8,
}

impl RuleSettings {
    #[inline]
    pub fn budget(&self) -> SafetyBudget {
        SafetyBudget::new(self.king_safety_depth)
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            checkmate_rule: CheckmateRule::default(),
            king_safety_depth: DEFAULT_KING_SAFETY_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Render with Black at the bottom.
    pub flip: bool,
    pub white_name: String,
    pub black_name: String,
    pub rules: RuleSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            flip: false,
            white_name: "Player1".to_owned(),
            black_name: "Player2".to_owned(),
            rules: RuleSettings::default(),
        }
    }
}

impl GameSettings {
    /// Sets an option by name. Names are matched case-insensitively.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessErrors::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match name.to_ascii_lowercase().as_str() {
            "flip" => self.flip = parse_bool(value).ok_or_else(invalid)?,
            "checkmaterule" => {
                self.rules.checkmate_rule = match value.to_ascii_lowercase().as_str() {
                    "kingescape" => CheckmateRule::KingEscape,
                    "nolegalreply" => CheckmateRule::NoLegalReply,
                    _ => return Err(invalid()),
                }
            }
            "kingsafetydepth" => {
                self.rules.king_safety_depth = value
                    .parse::<u8>()
                    .ok()
                    .filter(|depth| *depth > 0)
                    .ok_or_else(invalid)?
            }
            "whitename" => self.white_name = non_empty(value).ok_or_else(invalid)?,
            "blackname" => self.black_name = non_empty(value).ok_or_else(invalid)?,
            _ => return Err(ChessErrors::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
