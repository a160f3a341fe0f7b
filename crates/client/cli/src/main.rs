//! Command-line host that generates one character from on-disk content.
//!
//! Loads `items.ron`, `tables.ron` and `chargen.toml` from the data directory,
//! walks a fresh player through every chargen step and prints each persisted
//! event followed by the final entity and its derived view as JSON.
mod config;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;

use rustrim_content::ContentFactory;
use rustrim_core::{AttributeKey, Entity, EntityId, GearTier, derive};
use rustrim_runtime::{
    ChargenAction, ChargenWorkflow, InMemoryEntityStore, OracleManager, RuntimeConfig,
};

use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = CliConfig::from_env();
    info!(data_dir = %cli.data_dir.display(), "loading content");

    let factory = ContentFactory::new(&cli.data_dir);
    let oracles = OracleManager::load(&factory).context("failed to load content")?;
    let config = RuntimeConfig::new(factory.load_config()?).with_env_overrides();

    let missing = oracles.missing_tables(&config.chargen.gear_tables);
    if !missing.is_empty() {
        bail!("gear tables missing from tables.ron: {}", missing.join(", "));
    }

    let id = EntityId::from(cli.player_id.as_str());
    let store = Arc::new(InMemoryEntityStore::with_entities([Entity::new_player(
        id.clone(),
        cli.player_name.as_str(),
    )]));
    let workflow = ChargenWorkflow::builder()
        .config(config)
        .store(store.clone())
        .oracles(&oracles)
        .build()?;

    for action in chargen_script() {
        let outcome = workflow.handle(&id, action).await?;
        println!("{}", serde_json::to_string(&outcome.event)?);
    }

    let entity = store
        .get(&id)?
        .with_context(|| format!("entity {id} vanished from the store"))?;
    println!("{}", serde_json::to_string_pretty(&entity)?);
    println!("{}", serde_json::to_string_pretty(&derive(&entity))?);

    Ok(())
}

/// Every step of a full generation in the order a sheet would offer them.
fn chargen_script() -> Vec<ChargenAction> {
    AttributeKey::ALL
        .into_iter()
        .map(ChargenAction::GenerateAbility)
        .chain([ChargenAction::GenerateHealth])
        .chain(
            [GearTier::BonusGear, GearTier::Gear1, GearTier::Gear2]
                .into_iter()
                .map(ChargenAction::RollGear),
        )
        .chain([ChargenAction::CompleteChargen])
        .collect()
}
