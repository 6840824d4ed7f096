//! Helpers shared by controllers.
//!
//! Currently the caller's club role, read from the request headers by the
//! [`role::CurrentRole`] extractor.

pub mod role;
