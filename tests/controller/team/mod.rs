//! Tests for the team endpoints.

mod create_team;
mod delete_team;
mod get_team;

use super::*;
