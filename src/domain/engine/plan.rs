use serde::Serialize;

use crate::domain::engine::codec::VoiceCodec;
use crate::domain::engine::link_result::LinkResult;

/// Network-wide totals over all links of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub codec: VoiceCodec,
    pub total_t1_circuits: u32,
    pub total_pstn_bandwidth_mbps: f64,
    pub total_voip_bandwidth_mbps: f64,

    /// Sum of required circuits, i.e. simultaneous calls carried at the busy hour.
    pub total_concurrent_calls: u32,

    /// Links whose circuit search ended on the capped fallback.
    pub unmet_links: usize,
}

impl PlanSummary {
    pub fn from_results(results: &[LinkResult], codec: VoiceCodec) -> Self {
        results.iter().fold(
            PlanSummary {
                codec,
                total_t1_circuits: 0,
                total_pstn_bandwidth_mbps: 0.0,
                total_voip_bandwidth_mbps: 0.0,
                total_concurrent_calls: 0,
                unmet_links: 0,
            },
            |mut acc, r| {
                acc.total_t1_circuits += r.t1_circuits;
                acc.total_pstn_bandwidth_mbps += r.pstn_bandwidth_mbps;
                acc.total_voip_bandwidth_mbps += r.voip_bandwidth_mbps;
                acc.total_concurrent_calls += r.required_circuits;
                if !r.target_met {
                    acc.unmet_links += 1;
                }
                acc
            },
        )
    }
}

/// Result of one computation pass: per-link records in topology order
/// plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPlan {
    pub busy_hour_percent: f64,
    pub target_blocking: f64,
    pub links: Vec<LinkResult>,
    pub summary: PlanSummary,
}

impl NetworkPlan {
    pub fn all_targets_met(&self) -> bool {
        self.summary.unmet_links == 0
    }
}
