use std::collections::HashMap;

use crate::domain::engine::codec::VoiceCodec;
use crate::domain::utils::id::NodeId;
use crate::error::{Error, Result};

/// Settings shared by every link in one computation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficParameters {
    /// Share of the daily volume that falls into the busy hour, in percent.
    busy_hour_percent: f64,

    /// Highest acceptable Erlang-B blocking probability.
    target_blocking: f64,

    codec: VoiceCodec,
}

impl TrafficParameters {
    /// Validates and builds the parameters.
    ///
    /// `busy_hour_percent` must lie in `[0, 100]` and `target_blocking` in
    /// the open interval `(0, 1)`; NaN and infinities are rejected.
    pub fn new(busy_hour_percent: f64, target_blocking: f64, codec: VoiceCodec) -> Result<Self> {
        if !busy_hour_percent.is_finite() || !(0.0..=100.0).contains(&busy_hour_percent) {
            return Err(Error::invalid_input("busyHourPercent", format!("must be within [0, 100], got {}", busy_hour_percent)));
        }
        if !target_blocking.is_finite() || target_blocking <= 0.0 || target_blocking >= 1.0 {
            return Err(Error::invalid_input("targetBlocking", format!("must be within (0, 1), got {}", target_blocking)));
        }

        Ok(Self { busy_hour_percent, target_blocking, codec })
    }

    pub fn busy_hour_percent(&self) -> f64 {
        self.busy_hour_percent
    }

    pub fn target_blocking(&self) -> f64 {
        self.target_blocking
    }

    pub fn codec(&self) -> VoiceCodec {
        self.codec
    }
}

/// Offered daily traffic per node, in minutes per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTraffic {
    minutes: HashMap<NodeId, u64>,
}

impl NodeTraffic {
    pub fn new() -> Self {
        Self { minutes: HashMap::new() }
    }

    pub fn set(&mut self, node: NodeId, daily_minutes: u64) -> &mut Self {
        self.minutes.insert(node, daily_minutes);
        self
    }

    /// Inserts a raw value coming from an untyped source (JSON, CLI),
    /// rejecting negative, fractional or non-finite minutes.
    pub fn set_checked(&mut self, node: NodeId, daily_minutes: f64) -> Result<&mut Self> {
        let field = format!("nodeTraffic.{}", node);
        if !daily_minutes.is_finite() {
            return Err(Error::invalid_input(field, format!("must be a finite number, got {}", daily_minutes)));
        }
        if daily_minutes < 0.0 {
            return Err(Error::invalid_input(field, format!("must not be negative, got {}", daily_minutes)));
        }
        if daily_minutes.fract() != 0.0 {
            return Err(Error::invalid_input(field, format!("must be a whole number of minutes, got {}", daily_minutes)));
        }
        if daily_minutes > u64::MAX as f64 {
            return Err(Error::invalid_input(field, format!("is too large, got {}", daily_minutes)));
        }

        Ok(self.set(node, daily_minutes as u64))
    }

    pub fn daily_minutes(&self, node: &NodeId) -> Option<u64> {
        self.minutes.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for NodeTraffic {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self { minutes: iter.into_iter().map(|(label, minutes)| (NodeId::new(label), minutes)).collect() }
    }
}
