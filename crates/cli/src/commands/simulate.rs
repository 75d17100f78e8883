use anyhow::Result;
use frn_console_core::{ConsoleConfig, MockRules, ParamValues, pretty_json};
use frn_console_service::Simulator;

use crate::load_catalog;

/// Parses `name=value`; the value may be empty or contain further `=`.
pub(crate) fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        },
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

pub(crate) async fn run(
    config: &ConsoleConfig,
    id: &str,
    params: Vec<(String, String)>,
) -> Result<()> {
    let catalog = load_catalog(config)?;
    catalog.require(id)?;
    let params: ParamValues = params.into_iter().collect();
    let simulator = Simulator::new(MockRules::builtin(), config.latency);
    let outcome = simulator.simulate(id, &params).await;
    if outcome.is_success() {
        tracing::info!(endpoint_id = id, "simulated request succeeded");
    } else {
        tracing::warn!(endpoint_id = id, "simulated request failed");
    }
    println!("{}", pretty_json(outcome.payload())?);
    Ok(())
}
