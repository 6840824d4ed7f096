//! Live scoring service.
//!
//! Drives the [`Innings`] engine for matches being scored ball by ball. Sessions live in
//! memory in [`LiveSessions`]; nothing is written to the database until an innings is closed,
//! at which point every batter, bowler and fielder line becomes a score record. Closing the
//! second innings completes the match and tallies the result.
//!
//! Mutations work on a copy of the innings which replaces the session state only when the
//! whole operation succeeded, so a rejected request never leaves a half-applied change.

#[cfg(test)]
mod tests;

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    model::{
        fixture::MatchStatus,
        overs::Overs,
        score::DismissalType,
        scoring::{
            BatterLineDto, BowlerLineDto, CreaseEnd, DeliveryInput, ExtrasDto, InningsClosedDto,
            LiveScoreDto, OverDto, SetBattersDto, SetBowlerDto, StartInningsDto,
        },
    },
    scoring::{BatterCard, BowlerCard, Delivery, Innings, InningsConfig, ScoringError},
    server::{
        data::{
            fixture::{FixtureRepository, MatchResult},
            player::PlayerRepository,
            score::ScoreFigures,
        },
        error::{resource::ResourceError, Error},
        model::live::{InningsTotal, LiveMatch, LiveSessions},
        service::{
            fixture::{apply_status, innings_score, FixtureService},
            score::record_figures,
        },
    },
};

fn batter_line(card: &BatterCard) -> BatterLineDto {
    BatterLineDto {
        player_id: card.player_id,
        runs: card.runs,
        balls: card.balls,
        fours: card.fours,
        sixes: card.sixes,
        strike_rate: card.strike_rate(),
        out: card.is_out(),
        dismissal_type: card.dismissal.as_ref().map(|d| d.kind),
    }
}

fn bowler_line(card: &BowlerCard) -> BowlerLineDto {
    BowlerLineDto {
        player_id: card.player_id,
        overs: card.overs().as_notation(),
        maidens: card.maidens,
        runs: card.runs,
        wickets: card.wickets,
        wides: card.wides,
        no_balls: card.no_balls,
        economy: card.economy(),
    }
}

/// Snapshot of a live session as returned to scorers
fn live_score_dto(session: &LiveMatch) -> LiveScoreDto {
    let innings = &session.innings;
    let config = innings.config();
    let extras = innings.extras();

    let crease_line = |end: CreaseEnd| {
        innings
            .at_crease(end)
            .and_then(|player_id| innings.batter(player_id))
            .map(batter_line)
    };

    LiveScoreDto {
        match_id: session.match_id,
        innings: config.number,
        batting_team_id: config.batting_team_id,
        bowling_team_id: config.bowling_team_id,
        status: innings.status(),
        runs: innings.runs(),
        wickets: innings.wickets(),
        overs: innings.overs().as_notation(),
        max_overs: config.max_overs,
        target: config.target,
        runs_needed: innings.runs_needed(),
        run_rate: innings.run_rate(),
        required_run_rate: innings.required_run_rate(),
        extras: ExtrasDto {
            wides: extras.wides,
            no_balls: extras.no_balls,
            total: extras.total(),
        },
        striker: crease_line(CreaseEnd::Striker),
        non_striker: crease_line(CreaseEnd::NonStriker),
        bowler: innings
            .bowler()
            .and_then(|player_id| innings.bowler_card(player_id))
            .map(bowler_line),
        current_over: innings
            .current_over()
            .iter()
            .map(ToString::to_string)
            .collect(),
        batters: innings.batters().iter().map(batter_line).collect(),
        bowlers: innings.bowlers().iter().map(bowler_line).collect(),
        over_history: innings
            .completed_overs()
            .iter()
            .map(|over| OverDto {
                number: over.number,
                bowler_id: over.bowler_id,
                runs: over.runs,
                wickets: over.wickets,
                maiden: over.maiden,
                balls: over.marks.iter().map(ToString::to_string).collect(),
            })
            .collect(),
        first_innings: session
            .first_innings
            .filter(|_| config.number == 2)
            .map(|total| innings_score(total.runs, total.wickets, total.balls)),
    }
}

/// Per-player figures of an innings, keyed by player ID with the player's team
fn innings_figures(innings: &Innings) -> BTreeMap<i32, (i32, ScoreFigures)> {
    let config = innings.config();
    let mut figures: BTreeMap<i32, (i32, ScoreFigures)> = BTreeMap::new();

    for card in innings.batters() {
        let (_, entry) = figures
            .entry(card.player_id)
            .or_insert_with(|| (config.batting_team_id, ScoreFigures::default()));

        entry.batting_runs = card.runs;
        entry.batting_balls = card.balls;
        entry.fours = card.fours;
        entry.sixes = card.sixes;
        entry.is_out = card.is_out();
        entry.dismissal = Some(
            card.dismissal
                .as_ref()
                .map(|d| d.kind)
                .unwrap_or(DismissalType::NotOut),
        );
    }

    for card in innings.bowlers() {
        let (_, entry) = figures
            .entry(card.player_id)
            .or_insert_with(|| (config.bowling_team_id, ScoreFigures::default()));

        entry.bowling_balls = card.legal_balls;
        entry.maidens = card.maidens;
        entry.bowling_runs = card.runs;
        entry.bowling_wickets = card.wickets;
        entry.wides = card.wides;
        entry.no_balls = card.no_balls;
    }

    for card in innings.fielders() {
        let (_, entry) = figures
            .entry(card.player_id)
            .or_insert_with(|| (config.bowling_team_id, ScoreFigures::default()));

        entry.catches = card.catches;
        entry.stumpings = card.stumpings;
        entry.run_outs = card.run_outs;
    }

    figures
}

/// Result of a match decided by comparing the two innings totals
fn match_result(session: &LiveMatch, first: InningsTotal, second: InningsTotal) -> MatchResult {
    let winner_id = if second.runs > first.runs {
        Some(second.batting_team_id)
    } else if first.runs > second.runs {
        Some(first.batting_team_id)
    } else {
        None
    };

    let (team1, team2) = if first.batting_team_id == session.team1_id {
        (first, second)
    } else {
        (second, first)
    };

    MatchResult {
        winner_id,
        team1: (team1.runs, team1.wickets, team1.balls),
        team2: (team2.runs, team2.wickets, team2.balls),
    }
}

async fn roster<C: ConnectionTrait>(db: &C, team_id: i32) -> Result<HashSet<i32>, Error> {
    Ok(PlayerRepository::new(db)
        .find_by_team(team_id)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect())
}

fn ensure_rosters(batting: &HashSet<i32>, bowling: &HashSet<i32>) -> Result<(), Error> {
    if batting.len() < 2 {
        return Err(ResourceError::validation(
            "The batting team needs at least two players on its roster",
        )
        .into());
    }
    if bowling.is_empty() {
        return Err(ResourceError::validation(
            "The bowling team needs at least one player on its roster",
        )
        .into());
    }

    Ok(())
}

fn ensure_batter(session: &LiveMatch, player_id: i32) -> Result<(), Error> {
    if !session.batting_roster.contains(&player_id) {
        return Err(ResourceError::validation(format!(
            "Player {} is not on the batting team's roster",
            player_id
        ))
        .into());
    }

    Ok(())
}

fn ensure_fielder(session: &LiveMatch, player_id: i32) -> Result<(), Error> {
    if !session.bowling_roster.contains(&player_id) {
        return Err(ResourceError::validation(format!(
            "Player {} is not on the bowling team's roster",
            player_id
        ))
        .into());
    }

    Ok(())
}

pub struct LiveScoringService<'a> {
    db: &'a DatabaseConnection,
    sessions: &'a LiveSessions,
    default_max_overs: Option<i32>,
}

impl<'a> LiveScoringService<'a> {
    /// Creates a new instance of [`LiveScoringService`]
    ///
    /// # Arguments
    /// - `db` - Database connection used when starting and closing innings
    /// - `sessions` - Shared live sessions
    /// - `default_max_overs` - Over limit used when an innings is started without one
    pub fn new(
        db: &'a DatabaseConnection,
        sessions: &'a LiveSessions,
        default_max_overs: Option<i32>,
    ) -> Self {
        Self {
            db,
            sessions,
            default_max_overs,
        }
    }

    /// Gets the session entry of a match without locking it
    async fn entry(&self, match_id: i32) -> Option<Arc<Mutex<LiveMatch>>> {
        self.sessions.lock().await.get(&match_id).cloned()
    }

    /// Locks the session of a match, waiting for any request already working on it
    async fn lock_session(
        entry: Arc<Mutex<LiveMatch>>,
        match_id: i32,
    ) -> Result<OwnedMutexGuard<LiveMatch>, Error> {
        let session = entry.lock_owned().await;
        if session.finished {
            return Err(ResourceError::not_found("Live session", match_id).into());
        }

        Ok(session)
    }

    /// Removes a session from the map if it is still the one registered for the match
    async fn retire(&self, match_id: i32, entry: &Arc<Mutex<LiveMatch>>) {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .get(&match_id)
            .is_some_and(|current| Arc::ptr_eq(current, entry))
        {
            sessions.remove(&match_id);
        }
    }

    /// Starts the first innings, or the second once the first has been closed.
    ///
    /// The first innings puts the match `In Progress`. The second innings is batted by the
    /// other side with a target of the first innings runs plus one, under the same over limit.
    ///
    /// # Returns
    /// - `Ok(LiveScoreDto)` - The new innings
    /// - `Err(Error::ResourceError)` - Invalid batting team, over limit or rosters (400),
    ///   unknown match (404), innings already in play or match finished (409)
    pub async fn start_innings(
        &self,
        match_id: i32,
        start: StartInningsDto,
    ) -> Result<LiveScoreDto, Error> {
        match self.entry(match_id).await {
            Some(entry) => {
                let mut session = Self::lock_session(entry, match_id).await?;
                self.start_second_innings(&mut session, start).await
            }
            None => self.start_first_innings(match_id, start).await,
        }
    }

    async fn start_second_innings(
        &self,
        session: &mut LiveMatch,
        start: StartInningsDto,
    ) -> Result<LiveScoreDto, Error> {
        if !session.closed {
            return Err(ResourceError::conflict("An innings is already in progress").into());
        }

        let first = InningsTotal::of(&session.innings);
        let batting_team_id = session.opponent_of(first.batting_team_id);
        if start
            .batting_team_id
            .is_some_and(|team_id| team_id != batting_team_id)
        {
            return Err(ResourceError::validation(
                "The second innings must be batted by the other team",
            )
            .into());
        }

        let batting_roster = roster(self.db, batting_team_id).await?;
        let bowling_roster = roster(self.db, first.batting_team_id).await?;
        ensure_rosters(&batting_roster, &bowling_roster)?;

        session.innings = Innings::new(InningsConfig {
            number: 2,
            batting_team_id,
            bowling_team_id: first.batting_team_id,
            max_overs: session.max_overs,
            target: Some(first.runs + 1),
            wicket_limit: InningsConfig::wicket_limit_for_roster(batting_roster.len()),
        });
        session.closed = false;
        session.first_innings = Some(first);
        session.batting_roster = batting_roster;
        session.bowling_roster = bowling_roster;

        tracing::debug!(
            match_id = session.match_id,
            batting_team_id,
            "Started second innings"
        );

        Ok(live_score_dto(session))
    }

    async fn start_first_innings(
        &self,
        match_id: i32,
        start: StartInningsDto,
    ) -> Result<LiveScoreDto, Error> {
        let fixture = FixtureRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Match", match_id))?;

        let status: MatchStatus = fixture.status.parse()?;
        if matches!(status, MatchStatus::Completed | MatchStatus::Cancelled) {
            return Err(ResourceError::conflict(format!(
                "Match is {} and cannot be scored",
                status.as_str().to_lowercase()
            ))
            .into());
        }

        let batting_team_id = start.batting_team_id.ok_or_else(|| {
            ResourceError::validation("batting_team_id is required to start the first innings")
        })?;
        if batting_team_id != fixture.team1_id && batting_team_id != fixture.team2_id {
            return Err(
                ResourceError::validation("Batting team must be one of the two match teams")
                    .into(),
            );
        }
        let bowling_team_id = if batting_team_id == fixture.team1_id {
            fixture.team2_id
        } else {
            fixture.team1_id
        };

        let max_overs = match start.max_overs.or(self.default_max_overs) {
            Some(overs) if overs < 0 => {
                return Err(ResourceError::validation("Over limit cannot be negative").into())
            }
            Some(0) | None => None,
            Some(overs) => Some(overs),
        };

        let batting_roster = roster(self.db, batting_team_id).await?;
        let bowling_roster = roster(self.db, bowling_team_id).await?;
        ensure_rosters(&batting_roster, &bowling_roster)?;

        let session = LiveMatch {
            match_id,
            team1_id: fixture.team1_id,
            team2_id: fixture.team2_id,
            max_overs,
            innings: Innings::new(InningsConfig {
                number: 1,
                batting_team_id,
                bowling_team_id,
                max_overs,
                target: None,
                wicket_limit: InningsConfig::wicket_limit_for_roster(batting_roster.len()),
            }),
            closed: false,
            first_innings: None,
            batting_roster,
            bowling_roster,
            finished: false,
        };
        let snapshot = live_score_dto(&session);

        {
            let mut sessions = self.sessions.lock().await;
            if sessions.contains_key(&match_id) {
                return Err(ResourceError::conflict("An innings is already in progress").into());
            }
            sessions.insert(match_id, Arc::new(Mutex::new(session)));
        }

        if status != MatchStatus::InProgress {
            if let Err(err) = FixtureRepository::new(self.db)
                .set_status(fixture, MatchStatus::InProgress, None, false)
                .await
            {
                self.sessions.lock().await.remove(&match_id);
                return Err(err.into());
            }
        }

        tracing::debug!(match_id, batting_team_id, "Started first innings");

        Ok(snapshot)
    }

    /// Applies a change to a copy of the innings in play and commits it on success
    async fn update_innings<F>(&self, match_id: i32, change: F) -> Result<LiveScoreDto, Error>
    where
        F: FnOnce(&LiveMatch, &mut Innings) -> Result<(), Error>,
    {
        let entry = self
            .entry(match_id)
            .await
            .ok_or_else(|| ResourceError::not_found("Live session", match_id))?;
        let mut session = Self::lock_session(entry, match_id).await?;

        if session.closed {
            return Err(ScoringError::InningsComplete.into());
        }

        let mut innings = session.innings.clone();
        change(&session, &mut innings)?;
        session.innings = innings;

        Ok(live_score_dto(&session))
    }

    /// Sends batters to the empty crease ends.
    ///
    /// # Returns
    /// - `Ok(LiveScoreDto)` - The updated innings
    /// - `Err(Error::ResourceError)` - No batter given or player not on the batting roster (400),
    ///   no live session (404)
    /// - `Err(Error::ScoringError)` - End occupied or batter already dismissed
    pub async fn set_batters(
        &self,
        match_id: i32,
        batters: SetBattersDto,
    ) -> Result<LiveScoreDto, Error> {
        if batters.striker_id.is_none() && batters.non_striker_id.is_none() {
            return Err(ResourceError::validation(
                "At least one of striker_id and non_striker_id is required",
            )
            .into());
        }

        self.update_innings(match_id, |session, innings| {
            let ends = [
                (CreaseEnd::Striker, batters.striker_id),
                (CreaseEnd::NonStriker, batters.non_striker_id),
            ];

            for (end, player_id) in ends {
                if let Some(player_id) = player_id {
                    ensure_batter(session, player_id)?;
                    innings.set_batter(end, player_id)?;
                }
            }

            Ok(())
        })
        .await
    }

    /// Selects the bowler of the current over.
    ///
    /// # Returns
    /// - `Ok(LiveScoreDto)` - The updated innings
    /// - `Err(Error::ResourceError)` - Player not on the bowling roster (400), no live session (404)
    /// - `Err(Error::ScoringError)` - Over already under way or consecutive overs
    pub async fn set_bowler(
        &self,
        match_id: i32,
        bowler: SetBowlerDto,
    ) -> Result<LiveScoreDto, Error> {
        self.update_innings(match_id, |session, innings| {
            ensure_fielder(session, bowler.bowler_id)?;
            innings.set_bowler(bowler.bowler_id)?;

            Ok(())
        })
        .await
    }

    /// Records one delivery.
    ///
    /// # Returns
    /// - `Ok(LiveScoreDto)` - The innings after the delivery
    /// - `Err(Error::ResourceError)` - Fielder not on the bowling roster (400), no live session (404)
    /// - `Err(Error::ScoringError)` - Delivery not valid in the current state
    pub async fn record_delivery(
        &self,
        match_id: i32,
        delivery: DeliveryInput,
    ) -> Result<LiveScoreDto, Error> {
        self.update_innings(match_id, |session, innings| {
            if let DeliveryInput::Wicket {
                fielder_id: Some(fielder_id),
                ..
            } = &delivery
            {
                ensure_fielder(session, *fielder_id)?;
            }

            innings.record(Delivery::from(delivery))?;

            Ok(())
        })
        .await
    }

    pub async fn swap_strike(&self, match_id: i32) -> Result<LiveScoreDto, Error> {
        self.update_innings(match_id, |_, innings| Ok(innings.swap_strike()?))
            .await
    }

    /// Gets the live score of a match.
    ///
    /// # Returns
    /// - `Ok(LiveScoreDto)` - Current state of the session
    /// - `Err(Error::ResourceError)` - No live session for the match (404)
    pub async fn get_live_score(&self, match_id: i32) -> Result<LiveScoreDto, Error> {
        let entry = self
            .entry(match_id)
            .await
            .ok_or_else(|| ResourceError::not_found("Live session", match_id))?;
        let session = Self::lock_session(entry, match_id).await?;

        Ok(live_score_dto(&session))
    }

    /// Closes the innings in play and writes its figures as scores.
    ///
    /// Closing the second innings completes the match with the result decided on runs and
    /// ends the live session. An innings may be closed before it is complete, for example
    /// on a declaration.
    ///
    /// # Returns
    /// - `Ok(InningsClosedDto)` - Scores written and, after the second innings, the match
    /// - `Err(Error::ResourceError)` - No live session (404) or innings already closed (409)
    /// - `Err(Error::DbErr)` - Database operation failed; the session is left unchanged
    pub async fn end_innings(&self, match_id: i32) -> Result<InningsClosedDto, Error> {
        let entry = self
            .entry(match_id)
            .await
            .ok_or_else(|| ResourceError::not_found("Live session", match_id))?;
        let mut session = Self::lock_session(entry.clone(), match_id).await?;

        if session.closed {
            return Err(ResourceError::conflict("The innings has already been closed").into());
        }

        let number = session.innings.config().number;
        let total = InningsTotal::of(&session.innings);
        let figures = innings_figures(&session.innings);

        let txn = self.db.begin().await?;

        for (player_id, (team_id, player_figures)) in &figures {
            record_figures(&txn, match_id, *player_id, *team_id, player_figures).await?;
        }

        let result = match session.first_innings.filter(|_| number == 2) {
            Some(first) => {
                let fixture = FixtureRepository::new(&txn)
                    .find_by_id(match_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Match", match_id))?;
                let result = match_result(&session, first, total);

                apply_status(&txn, fixture, MatchStatus::Completed, Some(result)).await?;

                Some(result)
            }
            None => None,
        };

        txn.commit().await?;

        tracing::info!(
            match_id,
            innings = number,
            runs = total.runs,
            wickets = total.wickets,
            overs = %Overs::from_balls(total.balls),
            "Closed innings"
        );

        session.closed = true;
        let match_result = match result {
            Some(_) => {
                session.finished = true;
                drop(session);
                self.retire(match_id, &entry).await;

                Some(FixtureService::new(self.db).get_match(match_id).await?)
            }
            None => {
                session.first_innings = Some(total);

                None
            }
        };

        Ok(InningsClosedDto {
            innings: number,
            scores_recorded: figures.len(),
            match_result,
        })
    }

    /// Drops the live session of a match without writing any scores.
    ///
    /// # Returns
    /// - `Ok(())` - Session removed; the match status is left as it is
    /// - `Err(Error::ResourceError)` - No live session for the match (404)
    pub async fn abandon(&self, match_id: i32) -> Result<(), Error> {
        if !self.discard(match_id).await {
            return Err(ResourceError::not_found("Live session", match_id).into());
        }

        tracing::info!(match_id, "Abandoned live session");

        Ok(())
    }

    /// Drops the live session of a match if there is one, returning whether it existed.
    ///
    /// Used when the match itself is deleted.
    pub async fn discard(&self, match_id: i32) -> bool {
        let Some(entry) = self.sessions.lock().await.remove(&match_id) else {
            return false;
        };

        let mut session = entry.lock().await;
        let existed = !session.finished;
        session.finished = true;

        existed
    }

    /// Whether the player is on a roster of any innings being scored
    pub async fn is_playing(&self, player_id: i32) -> bool {
        let entries: Vec<Arc<Mutex<LiveMatch>>> =
            self.sessions.lock().await.values().cloned().collect();

        for entry in entries {
            let session = entry.lock().await;
            if !session.finished && session.involves_player(player_id) {
                return true;
            }
        }

        false
    }
}
