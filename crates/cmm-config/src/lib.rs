//! Proxy config document, its on-disk store and the router restart hook

mod error;
mod io;
mod lint;
mod paths;
mod restart;
mod store;
mod types;

pub use error::ConfigError;
pub use io::{atomic_write, read_json};
pub use lint::{lint, LintReport};
pub use paths::{Paths, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use restart::{CommandRestarter, RestartOutcome, Restarter, DEFAULT_RESTART_TIMEOUT};
pub use store::ConfigStore;
pub use types::{CcrConfig, RouterSection};
