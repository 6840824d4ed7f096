use chrono::Utc;
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::player::{CreatePlayerDto, UpdatePlayerDto, UpdatePlayerStatsDto};

/// Change applied to a player's career totals when a score is added, changed or removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub matches: i32,
    pub runs: i32,
    pub wickets: i32,
    pub catches: i32,
    pub stumpings: i32,
}

impl StatsDelta {
    pub fn negate(self) -> Self {
        Self {
            matches: -self.matches,
            runs: -self.runs,
            wickets: -self.wickets,
            catches: -self.catches,
            stumpings: -self.stumpings,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl std::ops::Sub for StatsDelta {
    type Output = StatsDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            matches: self.matches - rhs.matches,
            runs: self.runs - rhs.runs,
            wickets: self.wickets - rhs.wickets,
            catches: self.catches - rhs.catches,
            stumpings: self.stumpings - rhs.stumpings,
        }
    }
}

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a player with zeroed career totals
    pub async fn create(&self, player: CreatePlayerDto) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(player.name.trim().to_string()),
            age: ActiveValue::Set(player.age),
            role: ActiveValue::Set(player.role.to_string()),
            team_id: ActiveValue::Set(player.team_id),
            batting_style: ActiveValue::Set(player.batting_style.map(|s| s.to_string())),
            bowling_style: ActiveValue::Set(player.bowling_style.map(|s| s.to_string())),
            matches: ActiveValue::Set(0),
            runs: ActiveValue::Set(0),
            wickets: ActiveValue::Set(0),
            catches: ActiveValue::Set(0),
            stumpings: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn find_by_id(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        player_ids: &[i32],
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the roster of a team
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<entity::player::Model>, DbErr> {
        self.find_by_teams(&[team_id]).await
    }

    /// Gets the rosters of several teams at once
    pub async fn find_by_teams(
        &self,
        team_ids: &[i32],
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update; the team change is applied as given
    pub async fn update(
        &self,
        player: entity::player::Model,
        update: UpdatePlayerDto,
    ) -> Result<entity::player::Model, DbErr> {
        let mut player_am = player.into_active_model();

        if let Some(name) = update.name {
            player_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(age) = update.age {
            player_am.age = ActiveValue::Set(age);
        }
        if let Some(role) = update.role {
            player_am.role = ActiveValue::Set(role.to_string());
        }
        if let Some(team_id) = update.team_id {
            player_am.team_id = ActiveValue::Set(team_id);
        }
        if let Some(batting_style) = update.batting_style {
            player_am.batting_style = ActiveValue::Set(batting_style.map(|s| s.to_string()));
        }
        if let Some(bowling_style) = update.bowling_style {
            player_am.bowling_style = ActiveValue::Set(bowling_style.map(|s| s.to_string()));
        }

        player_am.update(self.db).await
    }

    /// Moves a player onto a team's roster, or off every roster with `None`
    pub async fn set_team(
        &self,
        player: entity::player::Model,
        team_id: Option<i32>,
    ) -> Result<entity::player::Model, DbErr> {
        let mut player_am = player.into_active_model();
        player_am.team_id = ActiveValue::Set(team_id);

        player_am.update(self.db).await
    }

    /// Removes every player from a team's roster
    pub async fn unassign_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::TeamId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites the provided career counters
    pub async fn set_stats(
        &self,
        player: entity::player::Model,
        stats: UpdatePlayerStatsDto,
    ) -> Result<entity::player::Model, DbErr> {
        let mut player_am = player.into_active_model();

        if let Some(matches) = stats.matches {
            player_am.matches = ActiveValue::Set(matches);
        }
        if let Some(runs) = stats.runs {
            player_am.runs = ActiveValue::Set(runs);
        }
        if let Some(wickets) = stats.wickets {
            player_am.wickets = ActiveValue::Set(wickets);
        }
        if let Some(catches) = stats.catches {
            player_am.catches = ActiveValue::Set(catches);
        }
        if let Some(stumpings) = stats.stumpings {
            player_am.stumpings = ActiveValue::Set(stumpings);
        }

        player_am.update(self.db).await
    }

    /// Adds a delta to a player's career counters in a single statement
    pub async fn adjust_stats(&self, player_id: i32, delta: StatsDelta) -> Result<(), DbErr> {
        if delta.is_zero() {
            return Ok(());
        }

        use entity::player::Column;

        entity::prelude::Player::update_many()
            .col_expr(Column::Matches, Expr::col(Column::Matches).add(delta.matches))
            .col_expr(Column::Runs, Expr::col(Column::Runs).add(delta.runs))
            .col_expr(Column::Wickets, Expr::col(Column::Wickets).add(delta.wickets))
            .col_expr(Column::Catches, Expr::col(Column::Catches).add(delta.catches))
            .col_expr(
                Column::Stumpings,
                Expr::col(Column::Stumpings).add(delta.stumpings),
            )
            .filter(Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a player
    ///
    /// Returns OK regardless of the player existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await
    }
}
