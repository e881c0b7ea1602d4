use crate::domain::engine::bandwidth::{pstn_bandwidth_mbps, t1_count, voip_bandwidth_mbps};
use crate::domain::engine::erlang::{MAX_OFFERED_ERLANGS, erlang_b, find_min_circuits};
use crate::domain::engine::link_result::LinkResult;
use crate::domain::engine::parameters::{NodeTraffic, TrafficParameters};
use crate::domain::engine::plan::{NetworkPlan, PlanSummary};
use crate::domain::topology::{Link, NetworkTopology};
use crate::error::{Error, Result};

/// Sizes trunk groups for a topology under one set of [`TrafficParameters`].
///
/// The engine holds no state between calls: `plan` on identical inputs
/// always yields an identical [`NetworkPlan`].
#[derive(Debug, Clone, Copy)]
pub struct TrafficEngine {
    params: TrafficParameters,
}

impl TrafficEngine {
    pub fn new(params: TrafficParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TrafficParameters {
        &self.params
    }

    fn busy_hour_minutes(&self, daily_minutes: u64) -> f64 {
        daily_minutes as f64 * (self.params.busy_hour_percent() / 100.0)
    }

    /// Busy-hour load in Erlangs offered by `daily_minutes` of traffic.
    pub fn offered_erlangs(&self, daily_minutes: u64) -> f64 {
        self.busy_hour_minutes(daily_minutes) / 60.0
    }

    /// Runs the sizing pipeline for a single link carrying `daily_minutes`.
    ///
    /// The offered load must not exceed [`MAX_OFFERED_ERLANGS`]; `plan`
    /// rejects larger loads before calling this.
    pub fn evaluate_link(&self, link: &Link, daily_minutes: u64) -> LinkResult {
        let busy_hour_minutes = self.busy_hour_minutes(daily_minutes);
        let erlangs = busy_hour_minutes / 60.0;

        let search = find_min_circuits(erlangs, self.params.target_blocking());
        let required_circuits = search.circuits;

        let result = LinkResult {
            link: link.id.clone(),
            from: link.from.clone(),
            to: link.to.clone(),
            daily_minutes,
            busy_hour_minutes: busy_hour_minutes.round() as u64,
            erlangs,
            required_circuits,
            t1_circuits: t1_count(required_circuits),
            pstn_bandwidth_mbps: pstn_bandwidth_mbps(required_circuits),
            voip_bandwidth_mbps: voip_bandwidth_mbps(required_circuits, self.params.codec()),
            actual_blocking: erlang_b(erlangs, required_circuits),
            target_met: search.target_met,
        };

        tracing::debug!(
            link = %result.link,
            erlangs = result.erlangs,
            circuits = result.required_circuits,
            blocking = result.actual_blocking,
            "link evaluated"
        );

        result
    }

    /// Evaluates every link of `topology` in order. Each link is offered the
    /// daily traffic of its originating node. A link offered more than
    /// [`MAX_OFFERED_ERLANGS`] is rejected with `Error::InvalidInput`.
    pub fn plan(&self, topology: &NetworkTopology, traffic: &NodeTraffic) -> Result<NetworkPlan> {
        let links = topology
            .links()
            .iter()
            .map(|link| -> Result<LinkResult> {
                let minutes = traffic.daily_minutes(&link.from).ok_or_else(|| Error::MissingTraffic(link.from.to_string()))?;
                let erlangs = self.offered_erlangs(minutes);
                if erlangs > MAX_OFFERED_ERLANGS {
                    return Err(Error::invalid_input(
                        format!("nodeTraffic.{}", link.from),
                        format!("offers {:.0} Erlangs on link '{}', above the limit of {}", erlangs, link.id, MAX_OFFERED_ERLANGS),
                    ));
                }
                Ok(self.evaluate_link(link, minutes))
            })
            .collect::<Result<Vec<LinkResult>>>()?;

        let summary = PlanSummary::from_results(&links, self.params.codec());
        if summary.unmet_links > 0 {
            log::warn!("{} of {} links could not meet the target blocking of {}", summary.unmet_links, links.len(), self.params.target_blocking());
        }
        log::info!(
            "Planned {} links: {} T-1s, {:.3} Mbps PSTN, {:.3} Mbps VoIP ({}).",
            links.len(),
            summary.total_t1_circuits,
            summary.total_pstn_bandwidth_mbps,
            summary.total_voip_bandwidth_mbps,
            summary.codec
        );

        Ok(NetworkPlan {
            busy_hour_percent: self.params.busy_hour_percent(),
            target_blocking: self.params.target_blocking(),
            links,
            summary,
        })
    }
}
