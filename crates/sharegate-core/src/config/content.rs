//! Content root configuration.

use serde::{Deserialize, Serialize};

/// Locations of the served file trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root of the gated resource tree.
    #[serde(default = "default_routes_root")]
    pub routes_root: String,
    /// Root of the ungated static assets served under `/~/`.
    #[serde(default = "default_static_root")]
    pub static_root: String,
    /// Implicit index document of a directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            routes_root: default_routes_root(),
            static_root: default_static_root(),
            index_file: default_index_file(),
        }
    }
}

fn default_routes_root() -> String {
    "./routes".to_string()
}

fn default_static_root() -> String {
    "./static".to_string()
}

fn default_index_file() -> String {
    "index.html".to_string()
}
