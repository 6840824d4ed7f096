//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an application state over the test database, checking
//! the status codes they produce for successful requests, role checks and error cases.

mod scoring;
mod team;
mod tournament;
mod trainer;

use pavilion_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
