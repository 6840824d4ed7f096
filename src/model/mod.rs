//! Request and response types shared by the HTTP API.
//!
//! DTOs in this module are what clients send and receive. They are deliberately decoupled
//! from the database entities: enumerated fields are typed, overs are exposed in cricket
//! notation and derived figures such as strike rate and economy are computed on the way out.

pub mod api;
pub mod fixture;
pub mod label;
pub mod overs;
pub mod player;
pub mod role;
pub mod score;
pub mod scoring;
pub mod team;
pub mod tournament;
pub mod trainer;
