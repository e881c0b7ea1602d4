//! Command line arguments and their merge into a [`ScenarioDto`].

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::collections::HashMap;

use crate::api::scenario_dto::{LinkDto, ScenarioDto, TopologyDto};
use crate::domain::engine::VoiceCodec;
use crate::loader::parser::parse_json_file;

pub const DEFAULT_BUSY_HOUR_PERCENT: f64 = 10.0;
pub const DEFAULT_TARGET_BLOCKING: f64 = 0.01;
pub const DEFAULT_CODEC: VoiceCodec = VoiceCodec::G711;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Erlang-B trunk sizing for PSTN and VoIP ring networks.
#[derive(Debug, Parser)]
#[command(name = "trunk-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scenario JSON file; other flags override its values
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Daily minutes for a node, as LABEL=MINUTES (repeatable)
    #[arg(short, long, value_parser = parse_traffic)]
    pub traffic: Vec<(String, f64)>,

    /// Comma-separated node labels forming a directed ring, in link order
    #[arg(long, value_delimiter = ',')]
    pub ring: Option<Vec<String>>,

    /// Percentage of daily traffic in the busy hour [default: 10]
    #[arg(short, long)]
    pub busy_hour: Option<f64>,

    /// Target blocking probability [default: 0.01]
    #[arg(short = 'p', long)]
    pub blocking: Option<f64>,

    /// Codec as bit rate or name: 64/G.711, 32/G.726, 8/G.729 [default: G.711]
    #[arg(short, long, value_parser = parse_codec)]
    pub codec: Option<VoiceCodec>,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level requested by `-v`; `None` leaves it to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }

    /// Loads the scenario file if one was given and applies the flags on
    /// top of it. Without a file the defaults above are used.
    pub fn scenario_dto(&self) -> Result<ScenarioDto> {
        let mut dto = match &self.scenario {
            Some(path) => parse_json_file::<ScenarioDto>(path).with_context(|| format!("loading scenario '{}'", path))?,
            None => ScenarioDto {
                node_traffic: HashMap::new(),
                busy_hour_percent: DEFAULT_BUSY_HOUR_PERCENT,
                target_blocking: DEFAULT_TARGET_BLOCKING,
                codec_bitrate_kbps: DEFAULT_CODEC.bitrate_kbps(),
                topology: None,
            },
        };

        for (label, minutes) in &self.traffic {
            dto.node_traffic.insert(label.clone(), *minutes);
        }
        if let Some(labels) = &self.ring {
            dto.topology = Some(ring_topology(labels));
        }
        if let Some(busy_hour) = self.busy_hour {
            dto.busy_hour_percent = busy_hour;
        }
        if let Some(blocking) = self.blocking {
            dto.target_blocking = blocking;
        }
        if let Some(codec) = self.codec {
            dto.codec_bitrate_kbps = codec.bitrate_kbps();
        }

        if dto.node_traffic.is_empty() {
            bail!("no traffic given; pass --scenario FILE or --traffic LABEL=MINUTES");
        }

        Ok(dto)
    }
}

/// Parses `LABEL=MINUTES`. Range checks happen later, in `NodeTraffic`.
pub fn parse_traffic(s: &str) -> std::result::Result<(String, f64), String> {
    let (label, minutes) = s.split_once('=').ok_or_else(|| format!("expected LABEL=MINUTES, got '{}'", s))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing node label in '{}'", s));
    }
    let minutes = minutes.trim().parse::<f64>().map_err(|e| format!("invalid minutes '{}': {}", minutes, e))?;
    Ok((label.to_string(), minutes))
}

pub fn parse_codec(s: &str) -> std::result::Result<VoiceCodec, String> {
    s.parse::<VoiceCodec>().map_err(|e| e.to_string())
}

fn ring_topology(labels: &[String]) -> TopologyDto {
    let links = labels.iter().zip(labels.iter().cycle().skip(1)).map(|(from, to)| LinkDto { from: from.clone(), to: to.clone() }).collect();
    TopologyDto { nodes: labels.to_vec(), links }
}
