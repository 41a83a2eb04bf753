use crate::models::RaceDistance;
use crate::time::parse_time_to_seconds;
use anyhow::{Context, Result};

/// Largest repetition distance a tool call may request
pub const MAX_REP_METERS: f64 = 42195.0;

/// Server defaults applied when a tool call leaves a field out
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub default_distance: RaceDistance,
    pub default_time: String,
    pub default_rep_meters: f64,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_distance: RaceDistance::FiveK,
            default_time: "00:22:00".to_string(),
            default_rep_meters: 1000.0,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PACE_MCP_DEFAULT_DISTANCE") {
            let distance = value
                .parse::<RaceDistance>()
                .map_err(|e| anyhow::anyhow!(e))
                .context("PACE_MCP_DEFAULT_DISTANCE is not a known race distance")?;
            if distance == RaceDistance::Custom {
                anyhow::bail!("PACE_MCP_DEFAULT_DISTANCE must be a preset, not 'custom'");
            }
            config.default_distance = distance;
        }

        if let Some(value) = lookup("PACE_MCP_DEFAULT_TIME") {
            let seconds = parse_time_to_seconds(&value)
                .context("PACE_MCP_DEFAULT_TIME is not a valid time")?;
            if seconds <= 0.0 {
                anyhow::bail!("PACE_MCP_DEFAULT_TIME must be longer than zero");
            }
            config.default_time = value.trim().to_string();
        }

        if let Some(value) = lookup("PACE_MCP_DEFAULT_REP_METERS") {
            let meters = value
                .trim()
                .parse::<f64>()
                .context("PACE_MCP_DEFAULT_REP_METERS is not a valid number")?;
            if !meters.is_finite() || meters <= 0.0 || meters > MAX_REP_METERS {
                anyhow::bail!(
                    "PACE_MCP_DEFAULT_REP_METERS must be between 0 and {} (got {})",
                    MAX_REP_METERS,
                    meters
                );
            }
            config.default_rep_meters = meters;
        }

        if let Some(value) = lookup("PACE_MCP_LOG_LEVEL") {
            config.log_level = value.trim().to_string();
        }

        Ok(config)
    }
}
