use std::path::Path;

use anyhow::Result;

use crate::errors::HeapbenchError;
use crate::types::{BenchConfig, BenchConfigFile};

/// Load a TOML config file and overlay it on the defaults.
///
/// Absent keys keep their defaults, so a config file containing only
/// `max-heap-mb = 5632` reproduces the larger-heap variant of the original
/// harness without touching anything else.
pub fn load_config(path: &Path) -> Result<BenchConfig> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| HeapbenchError::ConfigReadError {
            path: path.to_path_buf(),
            source,
        })?;

    let overlay: BenchConfigFile =
        toml::from_str(&contents).map_err(|e| HeapbenchError::ConfigParseError {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    let config = apply_overlay(BenchConfig::default(), overlay);
    validate(&config)?;
    Ok(config)
}

/// Merge an overlay into a base config. Overlay fields win when present.
pub fn apply_overlay(base: BenchConfig, overlay: BenchConfigFile) -> BenchConfig {
    BenchConfig {
        interpreter: overlay.interpreter.unwrap_or(base.interpreter),
        server_mode: overlay.server_mode.unwrap_or(base.server_mode),
        min_heap_mb: overlay.min_heap_mb.unwrap_or(base.min_heap_mb),
        max_heap_mb: overlay.max_heap_mb.unwrap_or(base.max_heap_mb),
        target: overlay.target.unwrap_or(base.target),
    }
}

/// Reject zero heap sizes. `min > max` is intentionally allowed: the JVM
/// rejects that combination itself, and non-JVM targets may not care.
pub fn validate(config: &BenchConfig) -> Result<()> {
    if config.min_heap_mb == 0 {
        return Err(HeapbenchError::InvalidHeapSize { value: 0 }.into());
    }
    if config.max_heap_mb == 0 {
        return Err(HeapbenchError::InvalidHeapSize { value: 0 }.into());
    }
    Ok(())
}
