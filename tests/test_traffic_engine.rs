use trunk_traffic_planner::domain::engine::{MAX_OFFERED_ERLANGS, NodeTraffic, TrafficEngine, TrafficParameters, VoiceCodec};
use trunk_traffic_planner::domain::topology::NetworkTopology;
use trunk_traffic_planner::error::Error;

const EPS: f64 = 1e-9;

fn default_traffic() -> NodeTraffic {
    [("US", 12000u64), ("China", 6000), ("UK", 3600)].into_iter().collect()
}

fn engine(busy_hour: f64, blocking: f64, codec: VoiceCodec) -> TrafficEngine {
    TrafficEngine::new(TrafficParameters::new(busy_hour, blocking, codec).unwrap())
}

#[test]
fn test_default_ring_plan() {
    let plan = engine(10.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &default_traffic()).unwrap();

    let links: Vec<&str> = plan.links.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links, vec!["US → China", "China → UK", "UK → US"]);

    let us = &plan.links[0];
    assert_eq!(us.daily_minutes, 12000);
    assert_eq!(us.busy_hour_minutes, 1200);
    assert!((us.erlangs - 20.0).abs() < EPS);
    assert_eq!(us.required_circuits, 30);
    assert_eq!(us.t1_circuits, 2);
    assert!((us.pstn_bandwidth_mbps - 1.92).abs() < EPS);
    assert!((us.voip_bandwidth_mbps - 2.4).abs() < EPS);
    assert!(us.actual_blocking <= 0.01);
    assert!(us.target_met);

    let china = &plan.links[1];
    assert!((china.erlangs - 10.0).abs() < EPS);
    assert_eq!(china.required_circuits, 18);
    assert_eq!(china.t1_circuits, 1);
    assert!((china.actual_blocking - 0.007142).abs() < 1e-5);

    let uk = &plan.links[2];
    assert!((uk.erlangs - 6.0).abs() < EPS);
    assert_eq!(uk.required_circuits, 13);
    assert_eq!(uk.t1_circuits, 1);

    let summary = &plan.summary;
    assert_eq!(summary.total_t1_circuits, 4);
    assert_eq!(summary.total_concurrent_calls, 61);
    assert!((summary.total_pstn_bandwidth_mbps - 3.904).abs() < EPS);
    assert!((summary.total_voip_bandwidth_mbps - 4.88).abs() < EPS);
    assert_eq!(summary.codec, VoiceCodec::G711);
    assert_eq!(summary.unmet_links, 0);
    assert!(plan.all_targets_met());
}

#[test]
fn test_plan_is_deterministic() {
    let engine = engine(12.5, 0.005, VoiceCodec::G726);
    let topology = NetworkTopology::default_ring();
    let traffic = default_traffic();

    let first = engine.plan(&topology, &traffic).unwrap();
    let second = engine.plan(&topology, &traffic).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_traffic_link_gets_one_circuit() {
    let traffic: NodeTraffic = [("US", 0u64), ("China", 6000), ("UK", 3600)].into_iter().collect();
    let plan = engine(10.0, 0.01, VoiceCodec::G729).plan(&NetworkTopology::default_ring(), &traffic).unwrap();

    let us = &plan.links[0];
    assert_eq!(us.busy_hour_minutes, 0);
    assert_eq!(us.erlangs, 0.0);
    assert_eq!(us.required_circuits, 1);
    assert_eq!(us.t1_circuits, 1);
    assert_eq!(us.actual_blocking, 0.0);
    assert!(us.target_met);
}

#[test]
fn test_zero_busy_hour_share() {
    let plan = engine(0.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &default_traffic()).unwrap();
    assert!(plan.links.iter().all(|r| r.required_circuits == 1 && r.erlangs == 0.0));
}

#[test]
fn test_busy_hour_minutes_are_rounded() {
    let traffic: NodeTraffic = [("US", 1005u64), ("China", 1004), ("UK", 1)].into_iter().collect();
    let plan = engine(10.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &traffic).unwrap();

    assert_eq!(plan.links[0].busy_hour_minutes, 101);
    assert_eq!(plan.links[1].busy_hour_minutes, 100);
    assert_eq!(plan.links[2].busy_hour_minutes, 0);
}

#[test]
fn test_heavy_link_reports_unmet_target() {
    // 120 000 min/day at 10% is 200 Erlangs, beyond the search window at 1%.
    let traffic: NodeTraffic = [("US", 120_000u64), ("China", 6000), ("UK", 3600)].into_iter().collect();
    let plan = engine(10.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &traffic).unwrap();

    let us = &plan.links[0];
    assert_eq!(us.required_circuits, 220);
    assert!(!us.target_met);
    assert!(us.actual_blocking > 0.01);
    assert_eq!(plan.summary.unmet_links, 1);
    assert!(!plan.all_targets_met());
}

#[test]
fn test_missing_traffic_is_an_error() {
    let traffic: NodeTraffic = [("US", 100u64), ("UK", 100)].into_iter().collect();
    let result = engine(10.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &traffic);
    assert!(matches!(result, Err(Error::MissingTraffic(node)) if node == "China"));
}

#[test]
fn test_codec_changes_only_voip_bandwidth() {
    let topology = NetworkTopology::default_ring();
    let traffic = default_traffic();
    let g711 = engine(10.0, 0.01, VoiceCodec::G711).plan(&topology, &traffic).unwrap();
    let g729 = engine(10.0, 0.01, VoiceCodec::G729).plan(&topology, &traffic).unwrap();

    for (a, b) in g711.links.iter().zip(g729.links.iter()) {
        assert_eq!(a.required_circuits, b.required_circuits);
        assert_eq!(a.pstn_bandwidth_mbps, b.pstn_bandwidth_mbps);
        assert!(b.voip_bandwidth_mbps < a.voip_bandwidth_mbps);
    }
}

#[test]
fn test_load_above_limit_is_rejected() {
    // 400 000 000 000 min/day entirely in the busy hour is far beyond any trunk group.
    let traffic: NodeTraffic = [("US", 400_000_000_000u64), ("China", 6000), ("UK", 3600)].into_iter().collect();
    let result = engine(100.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &traffic);

    match result {
        Err(Error::InvalidInput { field, reason }) => {
            assert_eq!(field, "nodeTraffic.US");
            assert!(reason.contains("US → China"), "{}", reason);
        }
        other => panic!("expected InvalidInput, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_load_at_limit_is_planned() {
    // Exactly MAX_OFFERED_ERLANGS at 100% busy hour: 6 000 000 min/day.
    let minutes = (MAX_OFFERED_ERLANGS * 60.0) as u64;
    let traffic: NodeTraffic = [("US", minutes), ("China", 6000), ("UK", 3600)].into_iter().collect();
    let plan = engine(100.0, 0.01, VoiceCodec::G711).plan(&NetworkTopology::default_ring(), &traffic).unwrap();

    let us = &plan.links[0];
    assert_eq!(us.erlangs, MAX_OFFERED_ERLANGS);
    // Large trunk groups run efficiently: ceil(A) circuits already block < 1%.
    assert_eq!(us.required_circuits, 100_000);
    assert!(us.target_met);
}
