pub use super::cricket_match::Entity as CricketMatch;
pub use super::player::Entity as Player;
pub use super::score::Entity as Score;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_match::Entity as TournamentMatch;
pub use super::tournament_team::Entity as TournamentTeam;
pub use super::trainer::Entity as Trainer;
pub use super::trainer_achievement::Entity as TrainerAchievement;
pub use super::trainer_player::Entity as TrainerPlayer;
pub use super::trainer_team::Entity as TrainerTeam;
