//! Auto-reload configuration (`nodemon.json`)

use crate::entrypoint::ENTRYPOINT_FILE;
use serde::{Deserialize, Serialize};

/// File name of the watcher config
pub const NODEMON_FILE: &str = "nodemon.json";

/// nodemon settings: what to watch and what to re-run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherConfig {
    pub watch: Vec<String>,
    pub ext: String,
    pub exec: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            watch: vec!["src".to_string()],
            ext: "ts".to_string(),
            exec: format!("tsx {}", ENTRYPOINT_FILE),
        }
    }
}
