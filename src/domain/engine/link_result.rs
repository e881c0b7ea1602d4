use serde::Serialize;

use crate::domain::utils::id::{LinkId, NodeId};

/// Derived sizing for one directed link. Recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResult {
    pub link: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    pub daily_minutes: u64,

    /// Busy-hour minutes, rounded to the nearest whole minute.
    pub busy_hour_minutes: u64,

    /// Offered busy-hour load in Erlangs (unrounded).
    pub erlangs: f64,
    pub required_circuits: u32,
    pub t1_circuits: u32,
    pub pstn_bandwidth_mbps: f64,
    pub voip_bandwidth_mbps: f64,

    /// Erlang-B blocking at `required_circuits`. May differ from the target
    /// because circuits come in whole units.
    pub actual_blocking: f64,

    /// `false` if the circuit search hit its cap before meeting the target.
    pub target_met: bool,
}
