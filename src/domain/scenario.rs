use crate::api::scenario_dto::ScenarioDto;
use crate::domain::engine::{NetworkPlan, NodeTraffic, TrafficEngine, TrafficParameters, VoiceCodec};
use crate::domain::topology::NetworkTopology;
use crate::domain::utils::id::NodeId;
use crate::error::{Error, Result};

/// A validated planning request: topology, per-node traffic and parameters.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub topology: NetworkTopology,
    pub traffic: NodeTraffic,
    pub params: TrafficParameters,
}

impl TryFrom<ScenarioDto> for Scenario {
    type Error = Error;

    fn try_from(dto: ScenarioDto) -> Result<Self> {
        let codec = VoiceCodec::try_from(dto.codec_bitrate_kbps)?;
        let params = TrafficParameters::new(dto.busy_hour_percent, dto.target_blocking, codec)?;

        let topology = match dto.topology {
            Some(topology_dto) => NetworkTopology::try_from(topology_dto)?,
            None => NetworkTopology::default_ring(),
        };

        let mut traffic = NodeTraffic::new();
        for (label, minutes) in dto.node_traffic {
            let node = NodeId::new(label);
            if !topology.contains(&node) {
                log::warn!("Ignoring traffic for node '{}', which is not part of the topology.", node);
                continue;
            }
            traffic.set_checked(node, minutes)?;
        }

        Ok(Scenario { topology, traffic, params })
    }
}

impl Scenario {
    pub fn plan(&self) -> Result<NetworkPlan> {
        TrafficEngine::new(self.params).plan(&self.topology, &self.traffic)
    }
}
