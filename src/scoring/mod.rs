//! Live innings scoring engine.
//!
//! [`Innings`] is a synchronous state machine over a single innings: it owns the batting and
//! bowling cards, the crease and the over in progress, and applies one [`Delivery`] at a time
//! following the laws a club scorer uses (strike rotation on odd runs, six-ball overs, no
//! consecutive overs for a bowler, extras that do not count as legal balls). It performs no
//! I/O; the live scoring service owns instances of it and persists the cards when the innings
//! is closed.

mod card;
mod delivery;
mod error;
mod innings;


pub use card::{BatterCard, BowlerCard, DismissalRecord, FieldingCard};
pub use delivery::{BallMark, Delivery, Dismissal};
pub use error::ScoringError;
pub use innings::{Extras, Innings, InningsConfig, OverSummary};
