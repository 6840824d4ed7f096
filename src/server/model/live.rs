//! In-memory live scoring sessions.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tokio::sync::Mutex;

use crate::scoring::Innings;

/// Live sessions keyed by match ID.
///
/// The map lock is only held to look up, insert or remove an entry. Each match has its own
/// `tokio` mutex, held while closing an innings writes scores.
pub type LiveSessions = Arc<Mutex<HashMap<i32, Arc<Mutex<LiveMatch>>>>>;

/// Totals of a closed innings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InningsTotal {
    pub batting_team_id: i32,
    pub runs: i32,
    pub wickets: i32,
    pub balls: i32,
}

impl InningsTotal {
    pub fn of(innings: &Innings) -> Self {
        Self {
            batting_team_id: innings.config().batting_team_id,
            runs: innings.runs(),
            wickets: innings.wickets(),
            balls: innings.overs().balls(),
        }
    }
}

/// Scoring state of one match being scored live.
#[derive(Clone, Debug)]
pub struct LiveMatch {
    pub match_id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    /// Over limit shared by both innings
    pub max_overs: Option<i32>,
    /// Current innings, or the first innings once closed and until the second starts
    pub innings: Innings,
    /// Whether `innings` has been closed and its scores written
    pub closed: bool,
    /// Totals of the first innings while the second is in play
    pub first_innings: Option<InningsTotal>,
    /// Player IDs eligible to bat in the current innings
    pub batting_roster: HashSet<i32>,
    /// Player IDs eligible to bowl or field in the current innings
    pub bowling_roster: HashSet<i32>,
    /// Set once the session has left the map; requests still waiting on it see no session
    pub finished: bool,
}

impl LiveMatch {
    /// The other side of the match.
    pub fn opponent_of(&self, team_id: i32) -> i32 {
        if team_id == self.team1_id {
            self.team2_id
        } else {
            self.team1_id
        }
    }

    /// Whether the player is on either roster of the innings in play
    pub fn involves_player(&self, player_id: i32) -> bool {
        self.batting_roster.contains(&player_id) || self.bowling_roster.contains(&player_id)
    }
}
