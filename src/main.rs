mod config;
mod error;
mod logging;
mod models;
mod pace;
mod report;
mod time;

use anyhow::{Context, Result};
use crate::config::{ServerConfig, MAX_REP_METERS};
use crate::error::PaceError;
use crate::models::{resolve_distance, RaceDistance};
use crate::pace::{compute_from_split, compute_goal_pace};
use crate::time::{format_hms, format_seconds, parse_time_to_seconds};
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tracing::{debug, error, info};

const GOAL_PACE_HINT: &str = "Please enter a valid distance and time (e.g. 00:22:30).";
const SPLIT_HINT: &str = "Please enter a valid 200m split in seconds.";

// Longest time string accepted from a tool call
const MAX_TIME_LEN: usize = 32;

#[derive(Clone)]
struct PaceMcpServer {
    config: Arc<ServerConfig>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PaceMcpServer {
    fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Calculate goal pace for a race: pace per mile and km, 200m/400m splits, and a cumulative 200m breakdown up to a repetition distance"
    )]
    async fn goal_pace(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<GoalPaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let distance = params.distance.unwrap_or(self.config.default_distance);
        let time = params
            .time
            .unwrap_or_else(|| self.config.default_time.clone());
        let rep_meters = params.rep_meters.unwrap_or(self.config.default_rep_meters);

        // Bound inputs before doing any work
        if time.len() > MAX_TIME_LEN {
            return Err(McpError::invalid_params_no_data(format!(
                "time must be at most {} characters",
                MAX_TIME_LEN
            )));
        }

        if rep_meters > MAX_REP_METERS {
            return Err(McpError::invalid_params_no_data(format!(
                "rep_meters cannot exceed {} (requested: {})",
                MAX_REP_METERS, rep_meters
            )));
        }

        let distance_meters = resolve_distance(distance, params.custom_distance_meters)
            .map_err(|e| McpError::invalid_input(e, GOAL_PACE_HINT))?;
        let total_seconds =
            parse_time_to_seconds(&time).map_err(|e| McpError::invalid_input(e, GOAL_PACE_HINT))?;
        let result = compute_goal_pace(distance_meters, total_seconds, rep_meters)
            .map_err(|e| McpError::invalid_input(e, GOAL_PACE_HINT))?;

        info!(
            tool = "goal_pace",
            distance = %distance,
            distance_meters,
            total_seconds,
            reps = result.breakdown.reps(),
            "Computed goal pace"
        );

        let output = report::goal_pace_markdown(distance, distance_meters, total_seconds, &result);

        Ok(CallToolResult::success(vec![
            Content::text(output),
            Content::json(&result)?,
        ]))
    }

    #[tool(description = "Convert a 200m split time in seconds into equivalent mile and km paces")]
    async fn split_pace(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<SplitPaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = compute_from_split(params.split_seconds)
            .map_err(|e| McpError::invalid_input(e, SPLIT_HINT))?;

        info!(
            tool = "split_pace",
            split_200 = result.split_200,
            "Converted 200m split"
        );

        Ok(CallToolResult::success(vec![
            Content::text(report::split_markdown(&result)),
            Content::json(result)?,
        ]))
    }

    #[tool(description = "Parse a time string (SS, MM:SS or H:MM:SS) into total seconds")]
    async fn parse_time(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<ParseTimeParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        if params.time.len() > MAX_TIME_LEN {
            return Err(McpError::invalid_params_no_data(format!(
                "time must be at most {} characters",
                MAX_TIME_LEN
            )));
        }

        let seconds = parse_time_to_seconds(&params.time)
            .map_err(|e| McpError::invalid_input(e, "Use SS, MM:SS or H:MM:SS."))?;

        debug!(tool = "parse_time", seconds, "Parsed time");

        let parsed = ParsedTime {
            seconds,
            minutes_seconds: format_seconds(seconds),
            hours_minutes_seconds: format_hms(seconds),
        };

        let output = format!(
            "- **Seconds:** {}\n- **M:SS:** {}\n- **HH:MM:SS:** {}\n",
            parsed.seconds, parsed.minutes_seconds, parsed.hours_minutes_seconds
        );

        Ok(CallToolResult::success(vec![
            Content::text(output),
            Content::json(&parsed)?,
        ]))
    }

    #[tool(description = "List the preset race distances accepted by goal_pace")]
    async fn list_distances(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            report::distances_markdown(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for PaceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("MCP server for running pace calculations. Provides tools to derive goal paces, interval splits and 200m split conversions.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Tool parameter structs
#[derive(Debug, Deserialize, JsonSchema)]
struct GoalPaceParams {
    #[schemars(
        description = "Race distance: mile, 3k, 5k, 10k, half_marathon, marathon or custom (default: 5k)"
    )]
    distance: Option<RaceDistance>,
    #[schemars(description = "Distance in meters, required when distance is 'custom'")]
    custom_distance_meters: Option<f64>,
    #[schemars(description = "Goal finish time as H:MM:SS, MM:SS or SS (default: 00:22:00)")]
    time: Option<String>,
    #[schemars(
        description = "Repetition distance in meters for the 200m breakdown, rounded to the nearest 200m (default: 1000)"
    )]
    rep_meters: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SplitPaceParams {
    #[schemars(description = "200m split time in seconds")]
    split_seconds: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ParseTimeParams {
    #[schemars(description = "Time as H:MM:SS, MM:SS or SS")]
    time: String,
}

#[derive(Debug, Serialize)]
struct ParsedTime {
    seconds: f64,
    minutes_seconds: String,
    hours_minutes_seconds: String,
}

// Helper methods for McpError
trait McpErrorExt {
    fn invalid_params_no_data<S: Into<String>>(message: S) -> Self;
    fn invalid_input(error: PaceError, hint: &str) -> Self;
}

impl McpErrorExt for McpError {
    fn invalid_params_no_data<S: Into<String>>(message: S) -> Self {
        McpError::invalid_params(message.into(), None)
    }

    fn invalid_input(error: PaceError, hint: &str) -> Self {
        debug!(%error, "Rejected tool input");
        McpError::invalid_params(format!("{}. {}", error, hint), None)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load pace server configuration")?;

    logging::init(&config.log_level)?;

    info!(
        default_distance = %config.default_distance,
        default_time = %config.default_time,
        default_rep_meters = config.default_rep_meters,
        "Loaded configuration"
    );

    // Create MCP server
    let server = PaceMcpServer::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Serve
    info!("Starting pace MCP server");
    let service = server.serve(transport).await.map_err(|e| {
        error!("Error starting server: {}", e);
        e
    })?;

    service.waiting().await?;

    Ok(())
}
