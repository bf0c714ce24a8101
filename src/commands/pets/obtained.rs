//! Handles `/obtainedpets`.

use crate::catalog::render_id_list;
use crate::commands::{BotCommand, Invocation, Reply};
use crate::database;
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::builder::CreateCommand;

pub const NONE_OBTAINED: &str = "You have not obtained any pets (that I know of).";

pub struct ObtainedPets;

#[async_trait]
impl BotCommand for ObtainedPets {
    fn name(&self) -> &'static str {
        "obtainedpets"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Spews out a response of all pets you have acquired")
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let obtained =
            database::obtained::list_obtained_pets(&state.db, invocation.user_id).await?;
        // Stored ids that have since left the dataset are not shown.
        let pets: Vec<_> = state
            .catalogs
            .pets
            .sorted_by_id()
            .into_iter()
            .filter(|pet| obtained.contains(&pet.id))
            .collect();
        if pets.is_empty() {
            return Ok(Reply::public(NONE_OBTAINED));
        }
        Ok(Reply::ephemeral(render_id_list(pets)))
    }
}
