mod add_match;
mod create_tournament;
mod update_tournament;

use chrono::NaiveDate;
use pavilion_test_utils::prelude::*;

use crate::server::{
    error::{resource::ResourceError, Error},
    service::tournament::TournamentService,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}
