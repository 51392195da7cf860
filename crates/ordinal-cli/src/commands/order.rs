//! Order command

use anyhow::{Context, Result};
use ordinal_order::ItemRegistry;

pub fn run(path: &str, format: &str) -> Result<()> {
    let mut registry = ItemRegistry::new();
    registry
        .load_file(path)
        .with_context(|| format!("Failed to load items from {}", path))?;

    let order = registry.order().context("Failed to resolve item order")?;
    tracing::debug!(items = order.len(), "resolved order");

    println!("{}", format_order(&order, format)?);
    Ok(())
}

fn format_order(order: &[String], format: &str) -> Result<String> {
    match format {
        "text" => Ok(order.join("\n")),
        "json" => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "order": order,
        }))?),
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}
