//! Serde types matching the engine's command document.

use gc_core::{SpawnArea, TargetId};

use crate::{CommandError, CommandResult};

/// The route-choice command body: targets and the probability mass assigned
/// to each.  Both vectors have the corridor count as their length and share
/// its ordering.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RouteChoiceCommand {
    #[serde(rename = "targetIds")]
    pub target_ids: Vec<TargetId>,
    pub probability: Vec<f64>,
}

/// A complete redirection command as sent over the control channel.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RedirectionCommand {
    #[serde(rename = "commandId")]
    pub command_id: u32,
    pub command: RouteChoiceCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<SpawnArea>,
}

impl RedirectionCommand {
    /// Serialize to the JSON document handed to the engine.
    pub fn encode(&self) -> CommandResult<String> {
        serde_json::to_string(self).map_err(CommandError::Codec)
    }

    /// Parse a command document (used by tests and channel mocks; the live
    /// engine is the usual consumer).
    pub fn decode(json: &str) -> CommandResult<Self> {
        serde_json::from_str(json).map_err(CommandError::Codec)
    }
}
