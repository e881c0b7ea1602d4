use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// IP (20) + UDP (8) + RTP (12) header bytes carried by every voice packet.
pub const IP_UDP_RTP_HEADER_BYTES: u32 = 40;

/// Voice codecs the planner can size VoIP trunks for. Every codec is
/// packetised at 20 ms, i.e. 50 packets per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VoiceCodec {
    G711,
    G726,
    G729,
}

impl VoiceCodec {
    pub const ALL: [VoiceCodec; 3] = [VoiceCodec::G711, VoiceCodec::G726, VoiceCodec::G729];

    pub fn bitrate_kbps(&self) -> u32 {
        match self {
            VoiceCodec::G711 => 64,
            VoiceCodec::G726 => 32,
            VoiceCodec::G729 => 8,
        }
    }

    pub fn packet_rate(&self) -> u32 {
        50
    }

    pub fn payload_bytes(&self) -> u32 {
        match self {
            VoiceCodec::G711 => 160,
            VoiceCodec::G726 => 80,
            VoiceCodec::G729 => 20,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VoiceCodec::G711 => "G.711",
            VoiceCodec::G726 => "G.726",
            VoiceCodec::G729 => "G.729",
        }
    }

    /// Bits on the wire per second for one call, headers included.
    pub fn wire_rate_bps(&self) -> u32 {
        (IP_UDP_RTP_HEADER_BYTES + self.payload_bytes()) * 8 * self.packet_rate()
    }
}

impl fmt::Display for VoiceCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kbps)", self.name(), self.bitrate_kbps())
    }
}

impl TryFrom<u32> for VoiceCodec {
    type Error = Error;

    fn try_from(kbps: u32) -> Result<Self, Self::Error> {
        VoiceCodec::ALL.into_iter().find(|c| c.bitrate_kbps() == kbps).ok_or_else(|| Error::UnsupportedCodec(kbps.to_string()))
    }
}

impl FromStr for VoiceCodec {
    type Err = Error;

    /// Accepts a bit rate ("64") or a codec name ("G.711", "g711").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(kbps) = trimmed.parse::<u32>() {
            return VoiceCodec::try_from(kbps);
        }

        match trimmed.to_ascii_uppercase().replace('.', "").as_str() {
            "G711" => Ok(VoiceCodec::G711),
            "G726" => Ok(VoiceCodec::G726),
            "G729" => Ok(VoiceCodec::G729),
            _ => Err(Error::UnsupportedCodec(trimmed.to_string())),
        }
    }
}
