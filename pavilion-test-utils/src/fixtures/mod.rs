//! Database fixture helpers used during test execution.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning a
//! fixture struct for one area of the schema:
//!
//! - `club` - teams and players
//! - `fixture` - matches and per-player scores
//! - `trainer` - trainers, achievements and assignments
//! - `tournament` - tournaments, participating teams and tournament matches

pub mod club;
pub mod fixture;
pub mod tournament;
pub mod trainer;
