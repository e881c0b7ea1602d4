use std::io::Write;

use crate::domain::engine::NetworkPlan;
use crate::error::Result;

/// Column order of the CSV report.
pub const CSV_HEADERS: [&str; 11] = [
    "Link",
    "DailyMinutes",
    "BusyHourMinutes",
    "Erlangs",
    "RequiredCircuits",
    "T1Circuits",
    "PstnBandwidthMbps",
    "VoipBandwidthMbps",
    "ActualBlocking",
    "TargetMet",
    "Codec",
];

/// Writes one `;`-separated row per link, in plan order, after a header row.
pub fn write_csv<W: Write>(plan: &NetworkPlan, writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(CSV_HEADERS)?;

    for link in &plan.links {
        csv_wtr.write_record([
            link.link.to_string(),
            link.daily_minutes.to_string(),
            link.busy_hour_minutes.to_string(),
            format!("{:.2}", link.erlangs),
            link.required_circuits.to_string(),
            link.t1_circuits.to_string(),
            format!("{:.3}", link.pstn_bandwidth_mbps),
            format!("{:.3}", link.voip_bandwidth_mbps),
            format!("{:.6}", link.actual_blocking),
            link.target_met.to_string(),
            plan.summary.codec.name().to_string(),
        ])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(plan: &NetworkPlan, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}
