//! Test utilities for the Pavilion workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares which tables and
//! fixtures are needed, then the resulting [`TestContext`] gives access to the
//! in-memory SQLite database and fixture helpers while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
