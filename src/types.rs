use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Explicit benchmark configuration. Replaces the defaulted parameters the
/// original harness baked into its function signatures.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub interpreter: PathBuf,
    pub server_mode: bool,
    pub min_heap_mb: u32,
    pub max_heap_mb: u32,
    pub target: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("java"),
            server_mode: true,
            min_heap_mb: 64,
            max_heap_mb: 4096,
            target: "PairingHeapMain".to_string(),
        }
    }
}

/// Config file overlay (loosely typed). Every field is optional; absent
/// fields keep their `BenchConfig` defaults.
#[derive(Debug, Default, Deserialize)]
pub struct BenchConfigFile {
    pub interpreter: Option<PathBuf>,
    #[serde(rename = "server-mode")]
    pub server_mode: Option<bool>,
    #[serde(rename = "min-heap-mb")]
    pub min_heap_mb: Option<u32>,
    #[serde(rename = "max-heap-mb")]
    pub max_heap_mb: Option<u32>,
    pub target: Option<String>,
}

/// Outcome of one timed run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub command: String,
    pub started_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub exit_code: Option<i32>,
}

/// Wraps a string in single quotes, escaping internal single quotes as `'\''`.
pub fn shell_escape_single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}
