//! Tests for the live scoring endpoints.

mod get_live_score;
mod start_innings;

use pavilion::{model::role::Role, server::controller::util::role::CurrentRole};

use super::*;
