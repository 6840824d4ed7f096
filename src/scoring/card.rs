use crate::model::{
    overs::{economy, strike_rate, Overs},
    score::DismissalType,
};

/// How a batter was dismissed.
#[derive(Clone, Debug, PartialEq)]
pub struct DismissalRecord {
    pub kind: DismissalType,
    /// Bowler credited with the wicket, absent for run outs
    pub bowler_id: Option<i32>,
    pub fielder_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatterCard {
    pub player_id: i32,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub dismissal: Option<DismissalRecord>,
}

impl BatterCard {
    pub fn new(player_id: i32) -> Self {
        Self {
            player_id,
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            dismissal: None,
        }
    }

    pub(super) fn score(&mut self, runs: i32) {
        self.runs += runs;
        match runs {
            4 => self.fours += 1,
            6 => self.sixes += 1,
            _ => {}
        }
    }

    pub fn is_out(&self) -> bool {
        self.dismissal.is_some()
    }

    pub fn strike_rate(&self) -> f64 {
        strike_rate(self.runs, self.balls)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BowlerCard {
    pub player_id: i32,
    pub legal_balls: i32,
    pub maidens: i32,
    /// Runs conceded, including wides and no-balls
    pub runs: i32,
    pub wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
}

impl BowlerCard {
    pub fn new(player_id: i32) -> Self {
        Self {
            player_id,
            legal_balls: 0,
            maidens: 0,
            runs: 0,
            wickets: 0,
            wides: 0,
            no_balls: 0,
        }
    }

    pub fn overs(&self) -> Overs {
        Overs::from_balls(self.legal_balls)
    }

    pub fn economy(&self) -> f64 {
        economy(self.runs, self.legal_balls)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldingCard {
    pub player_id: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
}

impl FieldingCard {
    pub fn new(player_id: i32) -> Self {
        Self {
            player_id,
            catches: 0,
            stumpings: 0,
            run_outs: 0,
        }
    }
}
