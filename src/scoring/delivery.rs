use std::fmt;

use crate::model::{
    score::DismissalType,
    scoring::{CreaseEnd, DeliveryInput},
};

/// A dismissal on a legal delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct Dismissal {
    pub kind: DismissalType,
    /// End of the dismissed batter, after any completed runs have crossed the batters
    pub batter: CreaseEnd,
    /// Runs completed before the dismissal; only possible for run outs
    pub runs: i32,
    pub fielder_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    Runs(i32),
    NoBall(i32),
    Wide(i32),
    Wicket(Dismissal),
}

impl From<DeliveryInput> for Delivery {
    fn from(input: DeliveryInput) -> Self {
        match input {
            DeliveryInput::Runs { runs } => Delivery::Runs(runs),
            DeliveryInput::NoBall { runs } => Delivery::NoBall(runs),
            DeliveryInput::Wide { runs } => Delivery::Wide(runs),
            DeliveryInput::Wicket {
                dismissal_type,
                batter,
                runs,
                fielder_id,
            } => Delivery::Wicket(Dismissal {
                kind: dismissal_type,
                batter,
                runs,
                fielder_id,
            }),
        }
    }
}

/// How a delivery is shown in the over summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallMark {
    Runs(i32),
    NoBall(i32),
    Wide(i32),
    Wicket,
}

impl fmt::Display for BallMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallMark::Runs(runs) => write!(f, "{}", runs),
            BallMark::NoBall(0) => f.write_str("nb"),
            BallMark::NoBall(runs) => write!(f, "nb{}", runs),
            BallMark::Wide(0) => f.write_str("wd"),
            BallMark::Wide(runs) => write!(f, "wd{}", runs),
            BallMark::Wicket => f.write_str("W"),
        }
    }
}
