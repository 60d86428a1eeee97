//! Command implementations: load payloads, run the pipeline, render.

use std::path::Path;

use anyhow::Context;
use dayscout_core::{AppConfig, Place, PricingConfig};
use dayscout_planner::{build_plan, default_template, filter_by_budget, Plan};
use dayscout_sources::{normalize_batch, parse_tagged_records};
use rust_decimal::Decimal;

use crate::PipelineArgs;

/// Normalize, filter and list the places that fit the budget.
pub fn places(config: &AppConfig, args: &PipelineArgs) -> anyhow::Result<()> {
    let (budget, people) = resolve_params(config, args);
    let pricing = load_pricing_tables(config, args.pricing.as_deref())?;

    let all = gather_places(&args.files, &pricing)?;
    let filtered = filter_by_budget(all, budget, people);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!(
        "{} places within {budget} per person (group of {people}):",
        filtered.len()
    );
    for place in &filtered {
        let rating = place
            .rating
            .map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"));
        println!(
            "  {:<32} {:<10} {:>8}  {} ({} ratings)",
            place.name, place.category, place.budget_per_person, rating, place.rating_count
        );
    }

    Ok(())
}

/// Run the full pipeline and render the resulting day plan.
pub fn plan(config: &AppConfig, args: &PipelineArgs) -> anyhow::Result<()> {
    let (budget, people) = resolve_params(config, args);
    let pricing = load_pricing_tables(config, args.pricing.as_deref())?;

    let all = gather_places(&args.files, &pricing)?;
    let filtered = filter_by_budget(all, budget, people);
    let plan = build_plan(&filtered, budget, people, &default_template());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    render_plan(&plan, people);

    Ok(())
}

fn resolve_params(config: &AppConfig, args: &PipelineArgs) -> (Decimal, u32) {
    let budget = args.budget.unwrap_or(config.default_budget_per_person);
    let people = args.people.unwrap_or(config.default_group_size);
    (budget, people)
}

/// Load pricing tables, preferring an explicit `--pricing` path.
///
/// An explicit path must exist; the configured default path silently falls
/// back to the built-in tables when absent, so the CLI works out of the box.
fn load_pricing_tables(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> anyhow::Result<PricingConfig> {
    if let Some(path) = override_path {
        return dayscout_core::load_pricing(path)
            .with_context(|| format!("loading pricing tables from {}", path.display()));
    }

    if config.pricing_path.exists() {
        dayscout_core::load_pricing(&config.pricing_path).with_context(|| {
            format!(
                "loading pricing tables from {}",
                config.pricing_path.display()
            )
        })
    } else {
        tracing::debug!(
            path = %config.pricing_path.display(),
            "pricing file not found, using built-in defaults"
        );
        Ok(PricingConfig::default())
    }
}

fn gather_places(files: &[std::path::PathBuf], pricing: &PricingConfig) -> anyhow::Result<Vec<Place>> {
    let mut records = Vec::new();
    for file in files {
        let bytes = std::fs::read(file)
            .with_context(|| format!("reading payload file {}", file.display()))?;
        let parsed = parse_tagged_records(&bytes)
            .with_context(|| format!("parsing payload file {}", file.display()))?;
        tracing::info!(file = %file.display(), count = parsed.len(), "loaded payload");
        records.extend(parsed);
    }

    Ok(normalize_batch(records, pricing))
}

fn render_plan(plan: &Plan, people: u32) {
    println!("Day plan:");
    for slot in &plan.slots {
        match &slot.place {
            Some(place) => println!(
                "  {:<10} {} ({}, {} per person)",
                slot.title, place.name, place.location, place.budget_per_person
            ),
            None => println!("  {:<10} (empty)", slot.title),
        }
    }
    println!(
        "Total: {} per person, {} for {} people",
        plan.per_person_total, plan.group_total, people
    );

    for note in &plan.diagnostics {
        println!("note: {note}");
    }
}
