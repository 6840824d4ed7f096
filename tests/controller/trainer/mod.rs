//! Tests for the trainer endpoints.

mod list_trainers_by_specialization;

use super::*;
