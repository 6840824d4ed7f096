use crate::model::{
    overs::{round2, Overs, BALLS_PER_OVER},
    score::DismissalType,
    scoring::{CreaseEnd, InningsStatus},
};

use super::{
    card::{BatterCard, BowlerCard, DismissalRecord, FieldingCard},
    delivery::{BallMark, Delivery, Dismissal},
    error::ScoringError,
};

/// Wickets that end an innings with a full side.
pub const MAX_WICKETS: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct InningsConfig {
    /// 1 or 2
    pub number: u8,
    pub batting_team_id: i32,
    pub bowling_team_id: i32,
    /// Over limit, `None` for an unlimited innings
    pub max_overs: Option<i32>,
    /// Runs required to win, second innings only
    pub target: Option<i32>,
    /// Wickets that bring the innings to an end
    pub wicket_limit: i32,
}

impl InningsConfig {
    /// Wicket limit for a batting side of `roster_len` players.
    ///
    /// A side is all out when one batter remains, capped at ten wickets and never below one.
    pub fn wicket_limit_for_roster(roster_len: usize) -> i32 {
        let batters = i32::try_from(roster_len).unwrap_or(i32::MAX);
        (batters - 1).clamp(1, MAX_WICKETS)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extras {
    pub wides: i32,
    pub no_balls: i32,
}

impl Extras {
    pub fn total(&self) -> i32 {
        self.wides + self.no_balls
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverSummary {
    /// 1-based over number
    pub number: i32,
    pub bowler_id: i32,
    pub runs: i32,
    pub wickets: i32,
    pub marks: Vec<BallMark>,
    pub maiden: bool,
}

/// State of one innings in play.
#[derive(Clone, Debug)]
pub struct Innings {
    config: InningsConfig,
    // Cards in the order players first appeared
    batters: Vec<BatterCard>,
    bowlers: Vec<BowlerCard>,
    fielders: Vec<FieldingCard>,
    striker: Option<i32>,
    non_striker: Option<i32>,
    bowler: Option<i32>,
    previous_bowler: Option<i32>,
    runs: i32,
    wickets: i32,
    legal_balls: i32,
    extras: Extras,
    current_over: Vec<BallMark>,
    over_runs: i32,
    over_wickets: i32,
    completed_overs: Vec<OverSummary>,
}

impl Innings {
    pub fn new(config: InningsConfig) -> Self {
        Self {
            config,
            batters: Vec::new(),
            bowlers: Vec::new(),
            fielders: Vec::new(),
            striker: None,
            non_striker: None,
            bowler: None,
            previous_bowler: None,
            runs: 0,
            wickets: 0,
            legal_balls: 0,
            extras: Extras::default(),
            current_over: Vec::new(),
            over_runs: 0,
            over_wickets: 0,
            completed_overs: Vec::new(),
        }
    }

    pub fn config(&self) -> &InningsConfig {
        &self.config
    }

    pub fn batters(&self) -> &[BatterCard] {
        &self.batters
    }

    pub fn bowlers(&self) -> &[BowlerCard] {
        &self.bowlers
    }

    pub fn fielders(&self) -> &[FieldingCard] {
        &self.fielders
    }

    pub fn batter(&self, player_id: i32) -> Option<&BatterCard> {
        self.batters.iter().find(|card| card.player_id == player_id)
    }

    pub fn bowler_card(&self, player_id: i32) -> Option<&BowlerCard> {
        self.bowlers.iter().find(|card| card.player_id == player_id)
    }

    pub fn at_crease(&self, end: CreaseEnd) -> Option<i32> {
        match end {
            CreaseEnd::Striker => self.striker,
            CreaseEnd::NonStriker => self.non_striker,
        }
    }

    pub fn bowler(&self) -> Option<i32> {
        self.bowler
    }

    pub fn previous_bowler(&self) -> Option<i32> {
        self.previous_bowler
    }

    pub fn runs(&self) -> i32 {
        self.runs
    }

    pub fn wickets(&self) -> i32 {
        self.wickets
    }

    pub fn overs(&self) -> Overs {
        Overs::from_balls(self.legal_balls)
    }

    pub fn extras(&self) -> Extras {
        self.extras
    }

    pub fn current_over(&self) -> &[BallMark] {
        &self.current_over
    }

    pub fn completed_overs(&self) -> &[OverSummary] {
        &self.completed_overs
    }

    /// Whether play can continue, and if not, why the innings ended.
    ///
    /// A reached target takes precedence, so a winning hit on the last ball of the
    /// final over reports `TargetReached`.
    pub fn status(&self) -> InningsStatus {
        if let Some(target) = self.config.target {
            if self.runs >= target {
                return InningsStatus::TargetReached;
            }
        }

        if self.wickets >= self.config.wicket_limit {
            return InningsStatus::AllOut;
        }

        if let Some(max_overs) = self.config.max_overs {
            if self.legal_balls >= max_overs * BALLS_PER_OVER {
                return InningsStatus::OversComplete;
            }
        }

        InningsStatus::InProgress
    }

    /// Runs per over, 0 before the first legal ball.
    pub fn run_rate(&self) -> f64 {
        if self.legal_balls == 0 {
            return 0.0;
        }

        round2(self.runs as f64 * BALLS_PER_OVER as f64 / self.legal_balls as f64)
    }

    pub fn runs_needed(&self) -> Option<i32> {
        self.config
            .target
            .map(|target| (target - self.runs).max(0))
    }

    pub fn balls_remaining(&self) -> Option<i32> {
        self.config
            .max_overs
            .map(|max_overs| (max_overs * BALLS_PER_OVER - self.legal_balls).max(0))
    }

    /// Runs per over needed to reach the target in the remaining overs.
    ///
    /// Only defined for a chase with an over limit and balls left to bowl.
    pub fn required_run_rate(&self) -> Option<f64> {
        match (self.runs_needed(), self.balls_remaining()) {
            (Some(needed), Some(balls)) if balls > 0 => Some(round2(
                needed as f64 * BALLS_PER_OVER as f64 / balls as f64,
            )),
            _ => None,
        }
    }

    /// Sends a new batter to an empty end.
    ///
    /// # Returns
    /// - `Ok(())` - Batter is at the crease
    /// - `Err(ScoringError::InningsComplete)` - Innings has ended
    /// - `Err(ScoringError::CreaseOccupied)` - The end already has a batter
    /// - `Err(ScoringError::AlreadyAtCrease)` - Player is batting at the other end
    /// - `Err(ScoringError::BatterUnavailable)` - Player has already been dismissed
    pub fn set_batter(&mut self, end: CreaseEnd, player_id: i32) -> Result<(), ScoringError> {
        self.ensure_in_progress()?;

        if self.at_crease(end).is_some() {
            return Err(ScoringError::CreaseOccupied(end));
        }
        if self.at_crease(end.opposite()) == Some(player_id) {
            return Err(ScoringError::AlreadyAtCrease(player_id));
        }
        if self.batter(player_id).is_some() {
            return Err(ScoringError::BatterUnavailable(player_id));
        }

        self.batters.push(BatterCard::new(player_id));
        match end {
            CreaseEnd::Striker => self.striker = Some(player_id),
            CreaseEnd::NonStriker => self.non_striker = Some(player_id),
        }

        Ok(())
    }

    /// Selects the bowler of the current over.
    ///
    /// The bowler may be replaced until the first legal ball of the over has been bowled;
    /// extras already bowled stay on the replaced bowler's card.
    pub fn set_bowler(&mut self, player_id: i32) -> Result<(), ScoringError> {
        self.ensure_in_progress()?;

        if self.legal_balls % BALLS_PER_OVER != 0 {
            return Err(ScoringError::OverInProgress);
        }
        if self.previous_bowler == Some(player_id) {
            return Err(ScoringError::ConsecutiveOvers(player_id));
        }

        self.bowler = Some(player_id);

        Ok(())
    }

    pub fn swap_strike(&mut self) -> Result<(), ScoringError> {
        self.ensure_in_progress()?;
        self.rotate_strike();

        Ok(())
    }

    /// Applies a delivery and returns its over mark.
    ///
    /// All validation happens before any state changes, so a rejected delivery leaves the
    /// innings untouched. After the sixth legal ball the over is closed, strike rotates
    /// and a new bowler must be selected.
    pub fn record(&mut self, delivery: Delivery) -> Result<BallMark, ScoringError> {
        self.ensure_in_progress()?;

        let (Some(striker), Some(_)) = (self.striker, self.non_striker) else {
            return Err(ScoringError::MissingBatters);
        };
        let bowler = self.bowler.ok_or(ScoringError::MissingBowler)?;

        let (mark, legal) = match delivery {
            Delivery::Runs(runs) => {
                check_runs("legal delivery", runs, 6)?;

                let card = self.batter_mut(striker);
                card.balls += 1;
                card.score(runs);
                self.concede(bowler, runs);
                if runs % 2 == 1 {
                    self.rotate_strike();
                }

                (BallMark::Runs(runs), true)
            }
            Delivery::NoBall(runs) => {
                check_runs("no-ball", runs, 6)?;

                let card = self.batter_mut(striker);
                card.balls += 1;
                card.score(runs);
                self.concede(bowler, 1 + runs);
                self.bowler_mut(bowler).no_balls += 1;
                self.extras.no_balls += 1;
                if runs % 2 == 1 {
                    self.rotate_strike();
                }

                (BallMark::NoBall(runs), false)
            }
            Delivery::Wide(runs) => {
                check_runs("wide", runs, 4)?;

                self.concede(bowler, 1 + runs);
                self.bowler_mut(bowler).wides += 1;
                self.extras.wides += 1 + runs;
                if runs % 2 == 1 {
                    self.rotate_strike();
                }

                (BallMark::Wide(runs), false)
            }
            Delivery::Wicket(dismissal) => {
                check_dismissal(&dismissal)?;
                self.dismiss(striker, bowler, dismissal);

                (BallMark::Wicket, true)
            }
        };

        self.current_over.push(mark);

        if legal {
            self.legal_balls += 1;
            self.bowler_mut(bowler).legal_balls += 1;

            if self.legal_balls % BALLS_PER_OVER == 0 {
                self.complete_over(bowler);
            }
        }

        Ok(mark)
    }

    fn ensure_in_progress(&self) -> Result<(), ScoringError> {
        if self.status().is_complete() {
            return Err(ScoringError::InningsComplete);
        }

        Ok(())
    }

    fn rotate_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    fn concede(&mut self, bowler: i32, runs: i32) {
        self.runs += runs;
        self.over_runs += runs;
        self.bowler_mut(bowler).runs += runs;
    }

    fn dismiss(&mut self, striker: i32, bowler: i32, dismissal: Dismissal) {
        let Dismissal {
            kind,
            batter,
            runs,
            fielder_id,
        } = dismissal;

        let card = self.batter_mut(striker);
        card.balls += 1;
        card.score(runs);
        self.concede(bowler, runs);
        if runs % 2 == 1 {
            self.rotate_strike();
        }

        let dismissed = match batter {
            CreaseEnd::Striker => self.striker.take(),
            CreaseEnd::NonStriker => self.non_striker.take(),
        };

        let bowler_id = kind.credits_bowler().then_some(bowler);
        let fielder_id = match kind {
            // Caught without a named fielder is caught and bowled
            DismissalType::Caught => Some(fielder_id.unwrap_or(bowler)),
            DismissalType::Stumped | DismissalType::RunOut => fielder_id,
            _ => None,
        };

        if let Some(player_id) = dismissed {
            self.batter_mut(player_id).dismissal = Some(DismissalRecord {
                kind,
                bowler_id,
                fielder_id,
            });
        }

        self.wickets += 1;
        self.over_wickets += 1;

        if let Some(bowler_id) = bowler_id {
            self.bowler_mut(bowler_id).wickets += 1;
        }

        if let Some(fielder_id) = fielder_id {
            let card = self.fielder_mut(fielder_id);
            match kind {
                DismissalType::Caught => card.catches += 1,
                DismissalType::Stumped => card.stumpings += 1,
                DismissalType::RunOut => card.run_outs += 1,
                _ => {}
            }
        }
    }

    fn complete_over(&mut self, bowler: i32) {
        let maiden = self.over_runs == 0;
        if maiden {
            self.bowler_mut(bowler).maidens += 1;
        }

        self.completed_overs.push(OverSummary {
            number: self.completed_overs.len() as i32 + 1,
            bowler_id: bowler,
            runs: self.over_runs,
            wickets: self.over_wickets,
            marks: std::mem::take(&mut self.current_over),
            maiden,
        });

        self.over_runs = 0;
        self.over_wickets = 0;
        self.rotate_strike();
        self.previous_bowler = Some(bowler);
        self.bowler = None;
    }

    fn batter_mut(&mut self, player_id: i32) -> &mut BatterCard {
        let index = match self.batters.iter().position(|c| c.player_id == player_id) {
            Some(index) => index,
            None => {
                self.batters.push(BatterCard::new(player_id));
                self.batters.len() - 1
            }
        };

        &mut self.batters[index]
    }

    fn bowler_mut(&mut self, player_id: i32) -> &mut BowlerCard {
        let index = match self.bowlers.iter().position(|c| c.player_id == player_id) {
            Some(index) => index,
            None => {
                self.bowlers.push(BowlerCard::new(player_id));
                self.bowlers.len() - 1
            }
        };

        &mut self.bowlers[index]
    }

    fn fielder_mut(&mut self, player_id: i32) -> &mut FieldingCard {
        let index = match self.fielders.iter().position(|c| c.player_id == player_id) {
            Some(index) => index,
            None => {
                self.fielders.push(FieldingCard::new(player_id));
                self.fielders.len() - 1
            }
        };

        &mut self.fielders[index]
    }
}

fn check_runs(kind: &'static str, runs: i32, max: i32) -> Result<(), ScoringError> {
    if !(0..=max).contains(&runs) {
        return Err(ScoringError::InvalidRuns { kind, runs, max });
    }

    Ok(())
}

fn check_dismissal(dismissal: &Dismissal) -> Result<(), ScoringError> {
    match dismissal.kind {
        DismissalType::NotOut => {
            return Err(ScoringError::InvalidDismissal(
                "'Not Out' is not a mode of dismissal".to_string(),
            ))
        }
        DismissalType::RunOut => check_runs("run out", dismissal.runs, 6)?,
        kind => {
            if dismissal.batter == CreaseEnd::NonStriker {
                return Err(ScoringError::InvalidDismissal(format!(
                    "only a run out can dismiss the non-striker, not {}",
                    kind
                )));
            }
            if dismissal.runs != 0 {
                return Err(ScoringError::InvalidDismissal(format!(
                    "runs cannot be completed on a {} dismissal",
                    kind
                )));
            }
            if matches!(kind, DismissalType::Bowled | DismissalType::Lbw)
                && dismissal.fielder_id.is_some()
            {
                return Err(ScoringError::InvalidDismissal(format!(
                    "{} does not involve a fielder",
                    kind
                )));
            }
        }
    }

    Ok(())
}
