//! One-shot search command handler.
//!
//! Same pipeline as the TUI (client + projector), without the session:
//! one request, print, exit. Failures surface as a normal error exit.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use trialsearch_core::client::SearchClient;
use trialsearch_core::config::Config;
use trialsearch_core::project;
use trialsearch_core::types::SearchResponse;

pub async fn run(config: &Config, query: &str, json: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Query must not be empty");
    }

    let client = SearchClient::from_config(config);
    tracing::info!(%query, backend = client.base_url(), "one-shot search");
    let response = client.search(query).await.context("search request failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_report(&response);
    Ok(())
}

fn print_report(response: &SearchResponse) {
    let chips = project::interpretation_chips(&response.interpretation);
    if !chips.is_empty() {
        let rendered: Vec<String> = chips
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        println!("Interpretation: {}", rendered.join(", "));
    }

    println!("Showing {}", project::result_count(response.trials.len()));
    if response.trials.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "NCT ID",
            "Phase",
            "Status",
            "Title",
            "Conditions",
            "Lead sponsor",
        ]);

    for record in &response.trials {
        let card = project::project(record);
        let status = match card.status {
            Some(status) if card.recruiting => format!("{status} *"),
            Some(status) => status.to_string(),
            None => String::new(),
        };
        let sponsor = if card.extra_sponsors > 0 {
            format!("{} (+{})", card.lead_sponsor, card.extra_sponsors)
        } else {
            card.lead_sponsor.to_string()
        };
        table.add_row(vec![
            card.nct_id.to_string(),
            card.phase.to_string(),
            status,
            card.title.to_string(),
            card.conditions.unwrap_or_default(),
            sponsor,
        ]);
    }

    println!("{table}");
}
