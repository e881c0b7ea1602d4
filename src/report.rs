//! Plain-text rendering of a [`NetworkPlan`] for the terminal.

use colored::Colorize;
use std::fmt;

use crate::domain::engine::NetworkPlan;

const HEADERS: [&str; 6] = ["Link", "Daily Minutes", "Busy Hour Minutes", "Erlangs", "Circuits", "Bandwidth (Mbps)"];

/// Formats `n` with `,` as thousands separator.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.chars().count())))
}

fn rows(plan: &NetworkPlan) -> Vec<[String; 6]> {
    plan.links
        .iter()
        .map(|r| {
            let circuits = if r.target_met {
                format!("{} ({} T-1s)", r.required_circuits, r.t1_circuits)
            } else {
                format!("{} ({} T-1s) !", r.required_circuits, r.t1_circuits)
            };
            [
                r.link.to_string(),
                group_thousands(r.daily_minutes),
                group_thousands(r.busy_hour_minutes),
                format!("{:.2}", r.erlangs),
                circuits,
                format!("PSTN: {:.3} | VoIP: {:.3}", r.pstn_bandwidth_mbps, r.voip_bandwidth_mbps),
            ]
        })
        .collect()
}

/// Renders the per-link table followed by the PSTN and VoIP totals.
/// Links that missed the blocking target are marked with `!`.
pub fn render(plan: &NetworkPlan) -> String {
    let mut out = String::new();
    write_report(&mut out, plan).expect("formatting into a String does not fail");
    out
}

pub fn write_report<W: fmt::Write>(out: &mut W, plan: &NetworkPlan) -> fmt::Result {
    let rows = rows(plan);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = HEADERS.iter().zip(widths).map(|(h, w)| pad(h, w)).collect();
    writeln!(out, "{}", header_line.join(" | ").bold())?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        let line: Vec<String> = row.iter().zip(widths).map(|(c, w)| pad(c.as_str(), w)).collect();
        writeln!(out, "{}", line.join(" | "))?;
    }

    let s = &plan.summary;
    writeln!(out)?;
    writeln!(out, "{}", "PSTN".bold())?;
    writeln!(out, "  Total T-1 Circuits:              {}", s.total_t1_circuits)?;
    writeln!(out, "  PSTN Bandwidth (64 kbps/circuit): {:.3} Mbps", s.total_pstn_bandwidth_mbps)?;
    writeln!(out, "  Traffic Model:                   Erlang B (blocked calls cleared)")?;
    writeln!(out, "{}", "VoIP".bold())?;
    writeln!(out, "  Codec:                           {}", s.codec)?;
    writeln!(out, "  Total Concurrent Calls:          {}", s.total_concurrent_calls)?;
    writeln!(out, "  VoIP Bandwidth (with overhead):  {:.3} Mbps", s.total_voip_bandwidth_mbps)?;
    writeln!(out, "  Protocol Overhead:               IP/UDP/RTP (40 bytes/packet)")?;

    if s.unmet_links > 0 {
        let warning = format!("{} link(s) marked '!' do not meet the target blocking of {}", s.unmet_links, plan.target_blocking);
        writeln!(out, "{}", warning.yellow())?;
    }

    Ok(())
}
