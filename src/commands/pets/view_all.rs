//! Handles `/viewallpets`.

use crate::catalog::render_id_list;
use crate::commands::{BotCommand, Invocation, Reply};
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::builder::CreateCommand;

pub struct ViewAllPets;

#[async_trait]
impl BotCommand for ViewAllPets {
    fn name(&self) -> &'static str {
        "viewallpets"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Spews out a response of all pets in osrs")
    }

    async fn execute(
        &self,
        state: &AppState,
        _invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        Ok(Reply::ephemeral(render_id_list(
            state.catalogs.pets.sorted_by_id(),
        )))
    }
}
