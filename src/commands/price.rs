//! Handles `/price`: fuzzy item lookup followed by a price-history fetch.

use super::{BotCommand, Invocation, Reply};
use crate::error::CommandError;
use crate::fuzzy;
use crate::model::AppState;
use crate::prices::format_gp;
use crate::prices::schema::latest_high_price;
use async_trait::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use tracing::debug;

pub struct Price;

#[async_trait]
impl BotCommand for Price {
    fn name(&self) -> &'static str {
        "price"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Returns the current estimated price of an item")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "itemname",
                    "What is the item name?",
                )
                .required(true),
            )
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let query = invocation.required_str("itemname")?;
        let items = &state.catalogs.items;
        let item_id = fuzzy::resolve(query, items.all())?;
        let item = items
            .get(item_id)
            .ok_or_else(|| CommandError::NotFound(query.to_string()))?;

        let history = state.prices.fetch_timeseries(item_id).await?;
        let latest = latest_high_price(&history.data)
            .ok_or_else(|| CommandError::NoPriceData(item.name.clone()))?;
        let price = latest
            .avg_high_price
            .ok_or_else(|| CommandError::NoPriceData(item.name.clone()))?;
        debug!(
            target = "prices",
            item_id,
            timestamp = latest.timestamp,
            price,
            "resolved price"
        );

        Ok(Reply::public(format!(
            "`{}` -> `{}` is roughly {}gp",
            query,
            item.name,
            format_gp(price)
        )))
    }
}
