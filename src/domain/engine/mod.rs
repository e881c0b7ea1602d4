pub mod bandwidth;
pub mod codec;
pub mod erlang;
pub mod link_result;
pub mod parameters;
pub mod plan;
pub mod traffic_engine;

pub use codec::VoiceCodec;
pub use erlang::{CircuitSearch, MAX_OFFERED_ERLANGS, erlang_b, find_min_circuits};
pub use link_result::LinkResult;
pub use parameters::{NodeTraffic, TrafficParameters};
pub use plan::{NetworkPlan, PlanSummary};
pub use traffic_engine::TrafficEngine;
