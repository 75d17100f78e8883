use anyhow::Result;
use frn_console_core::{ConsoleConfig, Credits, DashboardStats, EndpointQuery};

use crate::load_catalog;

pub(crate) fn run_list(config: &ConsoleConfig, query: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let categories = EndpointQuery::new(query).filter_categories(&catalog.categories());
    for category in &categories {
        println!("{} ({})", category.name, category.endpoints.len());
        for endpoint in &category.endpoints {
            println!(
                "  {:<6} {:<28} {} [{}]",
                endpoint.method.as_str(),
                endpoint.path,
                endpoint.name,
                endpoint.id
            );
        }
    }
    if categories.is_empty() {
        println!("No endpoints match '{query}'");
    }
    Ok(())
}

pub(crate) fn run_show(config: &ConsoleConfig, id: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let endpoint = catalog.require(id)?;
    println!("{}", serde_json::to_string_pretty(endpoint)?);
    Ok(())
}

pub(crate) fn run_stats(config: &ConsoleConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    let stats = DashboardStats::from_catalog(&catalog);
    println!("Total endpoints: {}", stats.total_endpoints);
    println!("Categories: {}", stats.categories);
    for share in &stats.method_breakdown {
        println!("  {:<6} {:>4}  {}", share.method, share.count, share.label);
    }
    Ok(())
}

pub(crate) fn run_credits(config: &ConsoleConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    let credits = Credits::from_catalog(&catalog);
    println!("{}", serde_json::to_string_pretty(&credits)?);
    Ok(())
}
