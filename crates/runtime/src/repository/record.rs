//! On-disk shape of the saved match.
//!
//! Every field is optional on read so records written by older or newer
//! builds still load: a missing or null field falls back to its default
//! independently of the others.

use match_core::{MatchConfig, MatchState, SideState, Team, TeamNames};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::{RepositoryError, Result};

/// Serialized match record stored under the gateway's key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedMatch {
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub history_a: Option<Vec<u32>>,
    pub history_b: Option<Vec<u32>>,
    pub wins_a: Option<u32>,
    pub wins_b: Option<u32>,
    pub current_game: Option<u32>,
    pub max_games: Option<u32>,
    pub point_limit: Option<u32>,
    pub team_a_name: Option<String>,
    pub team_b_name: Option<String>,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    /// Outer `None` means the field was absent (older record); inner `None`
    /// means the match was stored as undecided.
    #[serde(default, deserialize_with = "present")]
    pub match_winner: Option<Option<Team>>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<Team>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Team>::deserialize(deserializer).map(Some)
}

impl SavedMatch {
    /// Captures every field of `state`.
    pub fn from_state(state: &MatchState, timestamp: Option<i64>) -> Self {
        Self {
            score_a: Some(state.side_a.score),
            score_b: Some(state.side_b.score),
            history_a: Some(state.side_a.history.clone()),
            history_b: Some(state.side_b.history.clone()),
            wins_a: Some(state.side_a.wins),
            wins_b: Some(state.side_b.wins),
            current_game: Some(state.current_game),
            max_games: Some(state.config.max_games),
            point_limit: Some(state.config.point_limit),
            team_a_name: Some(state.names.get(Team::A).to_string()),
            team_b_name: Some(state.names.get(Team::B).to_string()),
            timestamp,
            match_winner: Some(state.winner),
        }
    }

    /// Parses a stored payload. The top level must be a JSON object.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        if !value.is_object() {
            return Err(RepositoryError::CorruptedData(format!(
                "expected a record object, found {}",
                json_kind(&value)
            )));
        }
        let record = Self::deserialize(value)?;
        record.check_counters()?;
        Ok(record)
    }

    /// Counters already at their ceiling could never advance again.
    fn check_counters(&self) -> Result<()> {
        let counters = [
            ("currentGame", self.current_game),
            ("winsA", self.wins_a),
            ("winsB", self.wins_b),
        ];
        match counters.into_iter().find(|(_, value)| *value == Some(u32::MAX)) {
            Some((field, _)) => Err(RepositoryError::CorruptedData(format!(
                "{field} is out of range"
            ))),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuilds the match, substituting defaults for missing fields.
    ///
    /// Zero is treated like a missing value for the game counter and the
    /// format fields, and an even best-of count falls back to the default.
    pub fn into_state(self) -> MatchState {
        let point_limit = self
            .point_limit
            .filter(|&limit| limit > 0)
            .unwrap_or(MatchConfig::DEFAULT_POINT_LIMIT);
        let max_games = self
            .max_games
            .filter(|&games| games % 2 == 1)
            .unwrap_or(MatchConfig::DEFAULT_MAX_GAMES);

        let names = TeamNames::new(
            self.team_a_name.as_deref().unwrap_or_default(),
            self.team_b_name.as_deref().unwrap_or_default(),
        );

        let mut state = MatchState::new(
            MatchConfig {
                point_limit,
                max_games,
            },
            names,
        );
        state.side_a = SideState {
            score: self.score_a.unwrap_or_default(),
            history: self.history_a.unwrap_or_default(),
            wins: self.wins_a.unwrap_or_default(),
        };
        state.side_b = SideState {
            score: self.score_b.unwrap_or_default(),
            history: self.history_b.unwrap_or_default(),
            wins: self.wins_b.unwrap_or_default(),
        };
        state.current_game = self.current_game.filter(|&game| game > 0).unwrap_or(1);
        state.winner = match self.match_winner {
            Some(stored) => stored,
            None => state.leader_with_required_wins(),
        };

        state
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
