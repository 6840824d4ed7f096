//! Tests for the role gated tournament endpoints.

mod create_tournament;
mod list_tournaments;

use chrono::NaiveDate;
use pavilion::{model::role::Role, server::controller::util::role::CurrentRole};

use super::*;

fn opening_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}
