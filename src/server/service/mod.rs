//! Service layer for business logic.
//!
//! Services validate requests, coordinate repositories inside transactions where several
//! rows must change together, keep derived data consistent (rosters, captaincy, career
//! totals, team records) and assemble the response DTOs. Reads run through
//! [`retry::RetryContext`] so transient connection failures are retried.

pub mod fixture;
pub mod player;
pub mod retry;
pub mod score;
pub mod scoring;
pub mod team;
pub mod tournament;
pub mod trainer;

mod lookup;
