//! Server application core modules.
//!
//! This module contains all server-side functionality for Pavilion: configuration, startup,
//! HTTP routing and controllers, services holding the club's business rules, repositories
//! over the database and the in-memory live scoring sessions.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
