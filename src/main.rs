use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};

use trunk_traffic_planner::cli::{Cli, OutputFormat};
use trunk_traffic_planner::domain::scenario::Scenario;
use trunk_traffic_planner::loader::export::{write_csv, write_json};
use trunk_traffic_planner::{logger, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.log_level());

    let dto = cli.scenario_dto()?;
    let scenario = Scenario::try_from(dto).context("invalid scenario")?;
    let plan = scenario.plan().context("planning failed")?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating '{}'", path))?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Table => write!(writer, "{}", report::render(&plan))?,
        OutputFormat::Json => {
            write_json(&plan, &mut writer)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => write_csv(&plan, &mut writer)?,
    }

    if let Some(path) = &cli.output {
        log::info!("Report written to '{}'.", path);
    }

    Ok(())
}
