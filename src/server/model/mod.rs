//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases and the in-memory
//! live scoring sessions.

pub mod app;
pub mod db;
pub mod live;
