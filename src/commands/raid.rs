//! Handles `/randomraid`.

use super::{BotCommand, Invocation, Reply, registered_name};
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;
use serenity::builder::CreateCommand;

/// Raids and group bosses `/randomraid` picks from.
pub const RAIDS: &[&str] = &[
    "Chambers of Xeric (Regular)",
    "Chambers of Xeric (Challenge Mode)",
    "Theater of Blood (Regular)",
    "Theater of Blood (Hard Mode)",
    "Tombs of Amascut",
    "Nex",
    "Nightmare",
];

pub fn pick_raid<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RAIDS.choose(rng).copied().unwrap_or(RAIDS[0])
}

pub struct RandomRaid;

#[async_trait]
impl BotCommand for RandomRaid {
    fn name(&self) -> &'static str {
        "randomraid"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Gives you a random raid (or group boss)")
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let raid = pick_raid(&mut rand::rng());
        let content = match registered_name(state, invocation.user_id).await? {
            Some(osrs_name) => format!("`{osrs_name}`, I challenge you to {raid}!"),
            None => format!("Filthy peasant. I challenge you to {raid}!"),
        };
        Ok(Reply::public(content))
    }
}
