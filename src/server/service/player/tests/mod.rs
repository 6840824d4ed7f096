mod create_player;

use pavilion_test_utils::prelude::*;

use crate::server::{
    error::{resource::ResourceError, Error},
    service::player::PlayerService,
};
