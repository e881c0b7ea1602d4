use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input of one planning pass as read from a scenario file.
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    /// Daily minutes per node label. Kept as `f64` so that negative or
    /// fractional values reach validation instead of failing to parse.
    pub node_traffic: HashMap<String, f64>,
    pub busy_hour_percent: f64,
    pub target_blocking: f64,
    pub codec_bitrate_kbps: u32,

    /// Defaults to the US → China → UK ring when absent.
    #[serde(default)]
    pub topology: Option<TopologyDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDto {
    pub nodes: Vec<String>,
    pub links: Vec<LinkDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    pub from: String,
    pub to: String,
}
