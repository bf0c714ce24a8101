use std::sync::Arc;

use anyhow::Context as _;
use herebot::catalog::{self, Catalogs};
use herebot::commands::CommandRegistry;
use herebot::config::Config;
use herebot::prices::{PriceIndex, WikiPriceClient};
use herebot::{AppState, database, handler};
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::ApplicationId;
use serenity::prelude::*;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    let config = Config::from_env().context("invalid configuration")?;

    // Nothing below may fail silently: a bot without its catalogs must not come online.
    info!("Opening database...");
    let db = database::init::open(&config.db_file)
        .await
        .context("failed to open database")?;

    info!("Fetching all osrs items...");
    let prices: Arc<dyn PriceIndex> = Arc::new(
        WikiPriceClient::new(config.price_api_base_url.clone())
            .context("failed to build price index client")?,
    );
    let items = catalog::items::load(prices.as_ref())
        .await
        .context("failed to fetch all items")?;

    info!("Opening data files...");
    let pets = catalog::pets::load(&config.pets_data_file).context("failed to open data files")?;

    let app_state = Arc::new(AppState::new(db, Catalogs { items, pets }, prices));

    let intents = GatewayIntents::GUILDS;
    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(ApplicationId::new(config.application_id))
        .event_handler(handler::Handler {
            registry: CommandRegistry::standard(),
        })
        .await
        .context("error creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    client.start().await.context("client error")?;
    Ok(())
}
