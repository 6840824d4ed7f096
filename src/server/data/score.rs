use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{label::UnknownLabel, score::DismissalType},
    server::data::player::StatsDelta,
};

/// Figures stored on a score row, with overs kept as legal balls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreFigures {
    pub batting_runs: i32,
    pub batting_balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub is_out: bool,
    pub dismissal: Option<DismissalType>,
    pub bowling_balls: i32,
    pub maidens: i32,
    pub bowling_runs: i32,
    pub bowling_wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
}

impl ScoreFigures {
    pub fn from_model(score: &entity::score::Model) -> Result<Self, UnknownLabel> {
        let dismissal = score
            .dismissal
            .as_deref()
            .map(str::parse::<DismissalType>)
            .transpose()?;

        Ok(Self {
            batting_runs: score.batting_runs,
            batting_balls: score.batting_balls,
            fours: score.fours,
            sixes: score.sixes,
            is_out: score.is_out,
            dismissal,
            bowling_balls: score.bowling_balls,
            maidens: score.maidens,
            bowling_runs: score.bowling_runs,
            bowling_wickets: score.bowling_wickets,
            wides: score.wides,
            no_balls: score.no_balls,
            catches: score.catches,
            stumpings: score.stumpings,
            run_outs: score.run_outs,
        })
    }

    /// Adds another set of figures for the same player and match.
    ///
    /// Counters are summed; the later dismissal wins when both record one.
    pub fn merge(&self, other: &ScoreFigures) -> ScoreFigures {
        ScoreFigures {
            batting_runs: self.batting_runs + other.batting_runs,
            batting_balls: self.batting_balls + other.batting_balls,
            fours: self.fours + other.fours,
            sixes: self.sixes + other.sixes,
            is_out: self.is_out || other.is_out,
            dismissal: other.dismissal.or(self.dismissal),
            bowling_balls: self.bowling_balls + other.bowling_balls,
            maidens: self.maidens + other.maidens,
            bowling_runs: self.bowling_runs + other.bowling_runs,
            bowling_wickets: self.bowling_wickets + other.bowling_wickets,
            wides: self.wides + other.wides,
            no_balls: self.no_balls + other.no_balls,
            catches: self.catches + other.catches,
            stumpings: self.stumpings + other.stumpings,
            run_outs: self.run_outs + other.run_outs,
        }
    }

    /// What this score contributes to the player's career totals
    pub fn career_contribution(&self) -> StatsDelta {
        StatsDelta {
            matches: 1,
            runs: self.batting_runs,
            wickets: self.bowling_wickets,
            catches: self.catches,
            stumpings: self.stumpings,
        }
    }

    fn apply(&self, score_am: &mut entity::score::ActiveModel) {
        score_am.batting_runs = ActiveValue::Set(self.batting_runs);
        score_am.batting_balls = ActiveValue::Set(self.batting_balls);
        score_am.fours = ActiveValue::Set(self.fours);
        score_am.sixes = ActiveValue::Set(self.sixes);
        score_am.is_out = ActiveValue::Set(self.is_out);
        score_am.dismissal = ActiveValue::Set(self.dismissal.map(|d| d.to_string()));
        score_am.bowling_balls = ActiveValue::Set(self.bowling_balls);
        score_am.maidens = ActiveValue::Set(self.maidens);
        score_am.bowling_runs = ActiveValue::Set(self.bowling_runs);
        score_am.bowling_wickets = ActiveValue::Set(self.bowling_wickets);
        score_am.wides = ActiveValue::Set(self.wides);
        score_am.no_balls = ActiveValue::Set(self.no_balls);
        score_am.catches = ActiveValue::Set(self.catches);
        score_am.stumpings = ActiveValue::Set(self.stumpings);
        score_am.run_outs = ActiveValue::Set(self.run_outs);
    }
}

pub struct ScoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScoreRepository<'a, C> {
    /// Creates a new instance of [`ScoreRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        match_id: i32,
        player_id: i32,
        team_id: i32,
        figures: &ScoreFigures,
    ) -> Result<entity::score::Model, DbErr> {
        let mut score = entity::score::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(player_id),
            team_id: ActiveValue::Set(team_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        figures.apply(&mut score);

        score.insert(self.db).await
    }

    pub async fn find_by_id(&self, score_id: i32) -> Result<Option<entity::score::Model>, DbErr> {
        entity::prelude::Score::find_by_id(score_id)
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::score::Model>, DbErr> {
        entity::prelude::Score::find()
            .order_by_asc(entity::score::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_match(&self, match_id: i32) -> Result<Vec<entity::score::Model>, DbErr> {
        entity::prelude::Score::find()
            .filter(entity::score::Column::MatchId.eq(match_id))
            .order_by_asc(entity::score::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::score::Model>, DbErr> {
        entity::prelude::Score::find()
            .filter(entity::score::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::score::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the score of a player in a match, of which there is at most one
    pub async fn find_by_match_and_player(
        &self,
        match_id: i32,
        player_id: i32,
    ) -> Result<Option<entity::score::Model>, DbErr> {
        entity::prelude::Score::find()
            .filter(entity::score::Column::MatchId.eq(match_id))
            .filter(entity::score::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Replaces every figure of a score
    pub async fn update_figures(
        &self,
        score: entity::score::Model,
        figures: &ScoreFigures,
    ) -> Result<entity::score::Model, DbErr> {
        let mut score_am = score.into_active_model();
        figures.apply(&mut score_am);

        score_am.update(self.db).await
    }

    /// Deletes a score
    ///
    /// Returns OK regardless of the score existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, score_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Score::delete_by_id(score_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_player(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Score::delete_many()
            .filter(entity::score::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use pavilion_test_utils::prelude::*;

        use crate::{
            model::score::DismissalType,
            server::data::score::{ScoreFigures, ScoreRepository},
        };

        /// Expect figures to be stored with the dismissal label
        #[tokio::test]
        async fn stores_figures() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_club_tables()
                .with_mock_team("Lions")
                .with_mock_team("Tigers")
                .with_mock_player("Ava", Some(1))
                .build()
                .await?;
            let fixture = test.fixture().insert_match(1, 2).await?;
            let figures = ScoreFigures {
                batting_runs: 34,
                batting_balls: 28,
                fours: 4,
                is_out: true,
                dismissal: Some(DismissalType::Lbw),
                ..Default::default()
            };

            let score_repo = ScoreRepository::new(&test.db);
            let score = score_repo.create(fixture.id, 1, 1, &figures).await?;

            assert_eq!(score.dismissal.as_deref(), Some("LBW"));
            assert_eq!(ScoreFigures::from_model(&score).unwrap(), figures);

            Ok(())
        }
    }

    mod find_by_match_and_player {
        use pavilion_test_utils::prelude::*;

        use crate::server::data::score::ScoreRepository;

        /// Expect the score for the pair and nothing for another match
        #[tokio::test]
        async fn finds_pair() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_club_tables()
                .with_mock_team("Lions")
                .with_mock_team("Tigers")
                .with_mock_player("Ava", Some(1))
                .build()
                .await?;
            let first = test.fixture().insert_match(1, 2).await?;
            let second = test.fixture().insert_match(2, 1).await?;
            let score = test.fixture().insert_score(first.id, 1, 1, 20, 0).await?;

            let score_repo = ScoreRepository::new(&test.db);

            let found = score_repo.find_by_match_and_player(first.id, 1).await?;
            assert_eq!(found.map(|s| s.id), Some(score.id));
            assert!(score_repo
                .find_by_match_and_player(second.id, 1)
                .await?
                .is_none());

            Ok(())
        }
    }

    mod merge {
        use crate::{model::score::DismissalType, server::data::score::ScoreFigures};

        /// Expect batting from one innings and bowling from the other to combine
        #[test]
        fn combines_batting_and_bowling() {
            let batting = ScoreFigures {
                batting_runs: 12,
                batting_balls: 10,
                is_out: true,
                dismissal: Some(DismissalType::Caught),
                ..Default::default()
            };
            let bowling = ScoreFigures {
                bowling_balls: 24,
                bowling_runs: 18,
                bowling_wickets: 2,
                catches: 1,
                ..Default::default()
            };

            let merged = batting.merge(&bowling);

            assert_eq!(merged.batting_runs, 12);
            assert_eq!(merged.dismissal, Some(DismissalType::Caught));
            assert_eq!(merged.bowling_wickets, 2);
            assert_eq!(merged.catches, 1);
            assert_eq!(merged.career_contribution().matches, 1);
        }
    }
}
