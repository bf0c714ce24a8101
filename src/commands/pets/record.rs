//! Handles `/addobtainedpets` and `/removeobtainedpets`.

use super::parse_pet_ids;
use crate::commands::{BotCommand, Invocation, Reply, registered_name};
use crate::database;
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use tracing::debug;

fn pet_ids_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "petids", description).required(true)
}

fn acknowledgement(osrs_name: Option<String>, verb: &str) -> Reply {
    let content = match osrs_name {
        Some(name) => format!("`{name}`, I have {verb} these pet entries for you."),
        None => format!("I have {verb} these pet entries for you."),
    };
    Reply::ephemeral(content)
}

pub struct AddObtainedPets;

#[async_trait]
impl BotCommand for AddObtainedPets {
    fn name(&self) -> &'static str {
        "addobtainedpets"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(
                "Registers your discord user with the given pet ids (comma separated list of ids)",
            )
            .add_option(pet_ids_option("What pets did you get?"))
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let ids = parse_pet_ids(invocation.required_str("petids")?)?;
        for pet_id in ids {
            if !state.catalogs.pets.contains(pet_id) {
                debug!(target = "pets.record", pet_id, "skipping unknown pet id");
                continue;
            }
            database::obtained::add_obtained_pet(&state.db, invocation.user_id, pet_id).await?;
        }
        let osrs_name = registered_name(state, invocation.user_id).await?;
        Ok(acknowledgement(osrs_name, "recorded"))
    }
}

pub struct RemoveObtainedPets;

#[async_trait]
impl BotCommand for RemoveObtainedPets {
    fn name(&self) -> &'static str {
        "removeobtainedpets"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(
                "Un-registers your discord user with the given pet ids (comma separated list of ids)",
            )
            .add_option(pet_ids_option("What pets did you actually not get?"))
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let ids = parse_pet_ids(invocation.required_str("petids")?)?;
        for pet_id in ids {
            database::obtained::remove_obtained_pet(&state.db, invocation.user_id, pet_id).await?;
        }
        let osrs_name = registered_name(state, invocation.user_id).await?;
        Ok(acknowledgement(osrs_name, "un-recorded"))
    }
}
