//! Data access layer repositories.
//!
//! One repository per aggregate. Every repository borrows any `ConnectionTrait`, so the same
//! code runs against the shared connection or inside a transaction opened by a service.

pub mod fixture;
pub mod player;
pub mod score;
pub mod team;
pub mod tournament;
pub mod trainer;
