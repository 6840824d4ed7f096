use chrono::Utc;
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Effect of a completed match on one team's record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamOutcome {
    Win,
    Loss,
    Draw,
}

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team with an empty record
    pub async fn create(
        &self,
        name: String,
        captain_id: Option<i32>,
    ) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            captain_id: ActiveValue::Set(captain_id),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            draws: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn find_by_id(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, team_ids: &[i32]) -> Result<Vec<entity::team::Model>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the team name and/or captain
    ///
    /// `captain_id` of `Some(None)` clears the captain, `None` leaves it unchanged.
    pub async fn update(
        &self,
        team: entity::team::Model,
        name: Option<String>,
        captain_id: Option<Option<i32>>,
    ) -> Result<entity::team::Model, DbErr> {
        let mut team_am = team.into_active_model();

        if let Some(name) = name {
            team_am.name = ActiveValue::Set(name);
        }
        if let Some(captain_id) = captain_id {
            team_am.captain_id = ActiveValue::Set(captain_id);
        }

        team_am.update(self.db).await
    }

    /// Clears the captaincy held by a player on any team
    ///
    /// Returns the number of teams that lost their captain.
    pub async fn clear_captain(&self, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::CaptainId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::team::Column::CaptainId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Adds one win, loss or draw to a team's record
    pub async fn record_outcome(&self, team_id: i32, outcome: TeamOutcome) -> Result<(), DbErr> {
        self.adjust_outcome(team_id, outcome, 1).await
    }

    /// Takes back an outcome added by [`Self::record_outcome`]
    pub async fn revert_outcome(&self, team_id: i32, outcome: TeamOutcome) -> Result<(), DbErr> {
        self.adjust_outcome(team_id, outcome, -1).await
    }

    async fn adjust_outcome(
        &self,
        team_id: i32,
        outcome: TeamOutcome,
        delta: i32,
    ) -> Result<(), DbErr> {
        let column = match outcome {
            TeamOutcome::Win => entity::team::Column::Wins,
            TeamOutcome::Loss => entity::team::Column::Losses,
            TeamOutcome::Draw => entity::team::Column::Draws,
        };

        entity::prelude::Team::update_many()
            .col_expr(column, Expr::col(column).add(delta))
            .filter(entity::team::Column::Id.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a team
    ///
    /// Returns OK regardless of the team existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect a new team to start with an empty record
        #[tokio::test]
        async fn creates_team_with_empty_record() -> Result<(), TestError> {
            let test = TestBuilder::new().with_club_tables().build().await?;
            let team_repo = TeamRepository::new(&test.db);

            let team = team_repo.create("Lions".to_string(), None).await?;

            assert_eq!(team.name, "Lions");
            assert_eq!(team.captain_id, None);
            assert_eq!((team.wins, team.losses, team.draws), (0, 0, 0));

            Ok(())
        }

        /// Expect Error when the team table does not exist
        #[tokio::test]
        async fn fails_without_tables() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let team_repo = TeamRepository::new(&test.db);

            let result = team_repo.create("Lions".to_string(), None).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect an explicit null captain to clear the captain and leave the name
        #[tokio::test]
        async fn clears_captain_and_keeps_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_club_tables()
                .with_mock_team("Lions")
                .with_mock_player("Ava", Some(1))
                .build()
                .await?;
            let team = test.club().insert_team("Tigers").await?;
            let team = test.club().set_captain(team, 1).await?;

            let team_repo = TeamRepository::new(&test.db);
            let updated = team_repo.update(team, None, Some(None)).await?;

            assert_eq!(updated.name, "Tigers");
            assert_eq!(updated.captain_id, None);

            Ok(())
        }
    }

    mod clear_captain {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect only teams captained by the player to be changed
        #[tokio::test]
        async fn clears_only_matching_captaincy() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_club_tables().build().await?;
            let (lions, lions_players) = test.club().insert_team_with_players("Lions", 2).await?;
            let (tigers, tigers_players) = test.club().insert_team_with_players("Tigers", 2).await?;
            test.club().set_captain(lions, lions_players[0].id).await?;
            test.club().set_captain(tigers, tigers_players[0].id).await?;

            let team_repo = TeamRepository::new(&test.db);
            let cleared = team_repo.clear_captain(lions_players[0].id).await?;

            assert_eq!(cleared, 1);
            let teams = team_repo.find_all().await?;
            assert_eq!(teams[0].captain_id, None);
            assert_eq!(teams[1].captain_id, Some(tigers_players[0].id));

            Ok(())
        }
    }

    mod record_outcome {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::team::{TeamOutcome, TeamRepository};

        /// Expect each outcome to increment its own counter
        #[tokio::test]
        async fn increments_counters() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_club_tables()
                .with_mock_team("Lions")
                .build()
                .await?;
            let team_repo = TeamRepository::new(&test.db);

            team_repo.record_outcome(1, TeamOutcome::Win).await?;
            team_repo.record_outcome(1, TeamOutcome::Win).await?;
            team_repo.record_outcome(1, TeamOutcome::Draw).await?;

            let team = team_repo.find_by_id(1).await?.unwrap();
            assert_eq!((team.wins, team.losses, team.draws), (2, 0, 1));

            Ok(())
        }
    }

    mod delete {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect no rows to be affected when deleting a team that does not exist
        #[tokio::test]
        async fn affects_no_rows_for_missing_team() -> Result<(), TestError> {
            let test = TestBuilder::new().with_club_tables().build().await?;
            let team_repo = TeamRepository::new(&test.db);

            let result = team_repo.delete(42).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
