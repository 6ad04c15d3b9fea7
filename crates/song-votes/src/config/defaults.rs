//! Configuration default values
//!
//! This module contains the default values for configuration options,
//! making them easily changeable in one central location.

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./song-votes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LIST_LIMIT: u64 = 10;

// Feature defaults
pub const DEFAULT_TEST_ROUTES: bool = false;

// Environment variable prefix for overrides, e.g. SONG_VOTES_WEB__PORT=8080
pub const ENV_PREFIX: &str = "SONG_VOTES_";
