use crate::api::scenario_dto::ScenarioDto;
use crate::domain::engine::NetworkPlan;
use crate::domain::scenario::Scenario;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod cli;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;

/// Reads a scenario file, validates it and sizes every link of its topology.
pub fn plan_from_file(file_path: &str) -> Result<NetworkPlan> {
    let scenario = load_scenario(file_path)?;
    scenario.plan()
}

pub fn load_scenario(file_path: &str) -> Result<Scenario> {
    let dto: ScenarioDto = parse_json_file::<ScenarioDto>(file_path)?;
    log::info!("Scenario '{}' parsed successfully.", file_path);

    let scenario = Scenario::try_from(dto)?;
    log::info!("Scenario validated: {} nodes, {} links.", scenario.topology.nodes().len(), scenario.topology.links().len());

    Ok(scenario)
}
