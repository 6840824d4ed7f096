mod create_match;
mod delete_match;

use pavilion_test_utils::prelude::*;

use crate::server::{
    error::{resource::ResourceError, Error},
    service::fixture::FixtureService,
};
