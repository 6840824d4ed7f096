pub mod model;
pub mod scoring;
pub mod server;
