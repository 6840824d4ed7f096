//! SeaORM entity definitions for the Pavilion database schema.

pub mod prelude;

pub mod cricket_match;
pub mod player;
pub mod score;
pub mod team;
pub mod tournament;
pub mod tournament_match;
pub mod tournament_team;
pub mod trainer;
pub mod trainer_achievement;
pub mod trainer_player;
pub mod trainer_team;
