// src/commands/mod.rs
// Declares the command modules and the name → handler table the event handler dispatches through.

pub mod iam;
pub mod invocation;
pub mod pets;
pub mod price;
pub mod raid;

use crate::database;
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::id::UserId;
use std::collections::HashMap;

pub use invocation::{Invocation, Reply};

/// One slash command: its registration payload and its behaviour.
#[async_trait]
pub trait BotCommand: Send + Sync {
    fn name(&self) -> &'static str;

    fn register(&self) -> CreateCommand;

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError>;
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn BotCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command the bot ships with.
    pub fn standard() -> Self {
        Self::new()
            .with(iam::Iam)
            .with(pets::view_all::ViewAllPets)
            .with(pets::obtained::ObtainedPets)
            .with(pets::record::AddObtainedPets)
            .with(pets::record::RemoveObtainedPets)
            .with(pets::random::RandomPet)
            .with(raid::RandomRaid)
            .with(price::Price)
    }

    pub fn with(mut self, command: impl BotCommand + 'static) -> Self {
        self.commands.insert(command.name(), Box::new(command));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn BotCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registration payloads, in name order.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .map(|c| c.register())
            .collect()
    }

    /// Runs the named handler. `None` when no handler has that name.
    pub async fn dispatch(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Option<Result<Reply, CommandError>> {
        let command = self.get(&invocation.command)?;
        Some(command.execute(state, invocation).await)
    }
}

/// Collapses a handler outcome into the message actually sent.
pub fn reply_for(command: &str, outcome: Result<Reply, CommandError>) -> Reply {
    match outcome {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(target = "dispatch", command = %command, error = ?e, "command failed");
            Reply::failure(command)
        }
    }
}

/// The invoker's registered OSRS name, if they ran `/iam`.
pub(crate) async fn registered_name(
    state: &AppState,
    user_id: UserId,
) -> Result<Option<String>, CommandError> {
    Ok(database::registry::get_display_name(&state.db, user_id).await?)
}
