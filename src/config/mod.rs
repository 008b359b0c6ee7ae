//! Configuration loading.
//!
//! The config file lives at `~/.config/recordview/config.toml` (or the
//! platform equivalent). Every field has a default, so a missing file or a
//! partial file is valid.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CacheConfig, ClientConfig, Config, FixtureConfig, UiConfig};
