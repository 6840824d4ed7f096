//! Database model type aliases.
//!
//! Short names for the SeaORM entity models of the `entity` crate, used throughout the
//! repositories and services.

/// A club team; its roster is the set of players referencing it.
pub type TeamModel = entity::team::Model;

/// A club player with career totals.
pub type PlayerModel = entity::player::Model;

/// A fixture between two club teams, including its result columns.
pub type MatchModel = entity::cricket_match::Model;

/// One player's batting, bowling and fielding figures in one match.
pub type ScoreModel = entity::score::Model;

pub type TrainerModel = entity::trainer::Model;

pub type TournamentModel = entity::tournament::Model;
