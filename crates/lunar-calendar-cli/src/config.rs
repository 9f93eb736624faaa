//! Loading the engine configuration and event files named on the command line.

use std::path::Path;

use anyhow::{Context, Result};
use lunar_calendar::{CalendarEvent, EngineConfig, EventCatalog};
use tracing::info;

/// Read an [`EngineConfig`] from a TOML file, or the defaults when no path is given.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: EngineConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    info!(path = %path.display(), lunar_offset = config.lunar_offset, "config loaded");
    Ok(config)
}

/// The official catalog from a dataset file, or the bundled one.
///
/// An explicitly named file that is unreadable or malformed is an error here;
/// the CLI does not silently fall back to an empty catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<EventCatalog> {
    let Some(path) = path else {
        return Ok(EventCatalog::bundled());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event dataset: {}", path.display()))?;
    let catalog = EventCatalog::from_json(&json)
        .with_context(|| format!("failed to parse event dataset: {}", path.display()))?;
    info!(path = %path.display(), events = catalog.len(), "event dataset loaded");
    Ok(catalog)
}

/// Personal events from a JSON array file.
pub fn load_local_events(path: Option<&Path>) -> Result<Vec<CalendarEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read local events: {}", path.display()))?;
    let events: Vec<CalendarEvent> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse local events: {}", path.display()))?;
    info!(path = %path.display(), events = events.len(), "local events loaded");
    Ok(events)
}
