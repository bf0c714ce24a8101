//! Handles `/iam`: links the invoking Discord user to an OSRS name.

use super::{BotCommand, Invocation, Reply};
use crate::database;
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

pub struct Iam;

#[async_trait]
impl BotCommand for Iam {
    fn name(&self) -> &'static str {
        "iam"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Registers your discord user with the given osrs user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "osrsuser",
                    "What is your osrs username?",
                )
                .required(true),
            )
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let osrs_name = invocation.required_str("osrsuser")?;
        database::registry::upsert_display_name(&state.db, invocation.user_id, osrs_name).await?;
        Ok(Reply::public(format!(
            "`{}` has been registered as `{}`",
            invocation.user_name, osrs_name
        )))
    }
}
