//! Infrastructure layer - Files on disk, configuration and logging

pub mod config;
pub mod logging;
pub mod source;

pub use config::Config;
pub use logging::init_logging;
pub use source::DocumentSource;
