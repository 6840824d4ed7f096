mod add_player;
mod create_team;
mod update_team;

use pavilion_test_utils::prelude::*;

use crate::server::{error::Error, service::team::TeamService};
