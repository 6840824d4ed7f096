use thiserror::Error;

use crate::model::scoring::CreaseEnd;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("The innings is complete, no further play can be recorded")]
    InningsComplete,
    #[error("Both batters must be at the crease before a delivery can be recorded")]
    MissingBatters,
    #[error("A bowler must be selected before a delivery can be recorded")]
    MissingBowler,
    #[error("The {0} end is already occupied")]
    CreaseOccupied(CreaseEnd),
    #[error("Player {0} is already at the crease")]
    AlreadyAtCrease(i32),
    #[error("Player {0} has already batted in this innings")]
    BatterUnavailable(i32),
    #[error("The bowler cannot be changed once the over has started")]
    OverInProgress,
    #[error("Player {0} bowled the previous over and cannot bowl consecutive overs")]
    ConsecutiveOvers(i32),
    #[error("Invalid runs for a {kind}: {runs} (expected 0-{max})")]
    InvalidRuns {
        kind: &'static str,
        runs: i32,
        max: i32,
    },
    #[error("Invalid dismissal: {0}")]
    InvalidDismissal(String),
}
