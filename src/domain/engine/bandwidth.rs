use crate::domain::engine::codec::VoiceCodec;

/// Channels carried by one T-1 carrier.
pub const T1_CHANNELS: u32 = 24;

/// Rate of one DS0 channel in kbps.
pub const DS0_KBPS: f64 = 64.0;

/// Number of T-1 carriers needed to carry `circuits` channels.
pub fn t1_count(circuits: u32) -> u32 {
    circuits.div_ceil(T1_CHANNELS)
}

/// Circuit-switched bandwidth in Mbps: one 64 kbps DS0 per circuit.
pub fn pstn_bandwidth_mbps(circuits: u32) -> f64 {
    circuits as f64 * DS0_KBPS / 1000.0
}

/// Packetised bandwidth in Mbps for `circuits` simultaneous calls,
/// including IP/UDP/RTP header overhead on every packet.
pub fn voip_bandwidth_mbps(circuits: u32, codec: VoiceCodec) -> f64 {
    let kbps = circuits as f64 * codec.wire_rate_bps() as f64 / 1000.0;
    kbps / 1000.0
}
