use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trunk_traffic_planner::domain::engine::bandwidth::{T1_CHANNELS, pstn_bandwidth_mbps, t1_count, voip_bandwidth_mbps};
use trunk_traffic_planner::domain::engine::erlang::SEARCH_WINDOW;
use trunk_traffic_planner::domain::engine::{VoiceCodec, erlang_b, find_min_circuits};

const EPS: f64 = 1e-9;

#[test]
fn test_blocking_strictly_decreases_with_circuits() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let a: f64 = rng.random_range(0.5..60.0);
        let mut previous = erlang_b(a, 0);
        for n in 1..=80 {
            let current = erlang_b(a, n);
            assert!(current < previous, "B({}, {}) = {} is not below B({}, {}) = {}", a, n, current, a, n - 1, previous);
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }
}

#[test]
fn test_min_circuits_is_smallest_meeting_target() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let a: f64 = rng.random_range(0.0..80.0);
        let p: f64 = rng.random_range(0.001..0.2);
        let search = find_min_circuits(a, p);
        let start = a.ceil() as u32;

        if search.target_met {
            assert!(search.circuits >= start);
            assert!(erlang_b(a, search.circuits) <= p);
            if search.circuits > start {
                assert!(erlang_b(a, search.circuits - 1) > p, "A = {}, p = {}: {} is not minimal", a, p, search.circuits);
            }
        } else {
            assert_eq!(search.circuits, start + SEARCH_WINDOW);
            assert!(erlang_b(a, search.circuits) > p);
        }
    }
}

#[test]
fn test_large_load_exhausts_search_window() {
    // 200 Erlangs at 1% needs more than ceil(A) + 20 circuits.
    let search = find_min_circuits(200.0, 0.01);
    assert_eq!(search.circuits, 220);
    assert!(!search.target_met);
}

#[test]
fn test_t1_count_groups_by_24() {
    assert_eq!(t1_count(0), 0);
    assert_eq!(t1_count(1), 1);
    assert_eq!(t1_count(24), 1);
    assert_eq!(t1_count(25), 2);
    assert_eq!(t1_count(48), 2);
    for c in 0..500u32 {
        assert_eq!(t1_count(c), (c as f64 / T1_CHANNELS as f64).ceil() as u32);
    }
}

#[test]
fn test_full_t1_bandwidth() {
    assert!((voip_bandwidth_mbps(24, VoiceCodec::G711) - 1.92).abs() < EPS);
    assert!((pstn_bandwidth_mbps(24) - 1.536).abs() < EPS);
    assert!((voip_bandwidth_mbps(24, VoiceCodec::G726) - 1.152).abs() < EPS);
    assert!((voip_bandwidth_mbps(24, VoiceCodec::G729) - 0.576).abs() < EPS);
}

#[test]
fn test_voip_bandwidth_strictly_increasing() {
    for codec in VoiceCodec::ALL {
        assert_eq!(voip_bandwidth_mbps(0, codec), 0.0);
        for c in 1..200 {
            assert!(voip_bandwidth_mbps(c, codec) > voip_bandwidth_mbps(c - 1, codec));
        }
    }
}

#[test]
fn test_voip_overhead_exceeds_pstn_for_g711() {
    // 40 header bytes on 160 payload bytes add 25% on top of 64 kbps.
    for c in 1..50 {
        let ratio = voip_bandwidth_mbps(c, VoiceCodec::G711) / pstn_bandwidth_mbps(c);
        assert!((ratio - 1.25).abs() < EPS);
    }
}
