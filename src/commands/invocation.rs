//! Platform-neutral view of one slash command call and the single reply it produces.

use crate::error::CommandError;
use serenity::builder::CreateInteractionResponseMessage;
use serenity::model::application::CommandInteraction;
use serenity::model::id::UserId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub user_id: UserId,
    /// Discord username of the invoker, echoed back by `/iam`.
    pub user_name: String,
    /// String-valued options by name.
    pub options: HashMap<String, String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            user_id,
            user_name: user_name.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let options = interaction
            .data
            .options
            .iter()
            .filter_map(|opt| opt.value.as_str().map(|v| (opt.name.clone(), v.to_string())))
            .collect();
        Self {
            command: interaction.data.name.clone(),
            user_id: interaction.user.id,
            user_name: interaction.user.name.clone(),
            options,
        }
    }

    /// Trimmed value of a required string option; missing or blank is `InvalidInput`.
    pub fn required_str(&self, name: &str) -> Result<&str, CommandError> {
        self.options
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CommandError::InvalidInput(format!("missing option `{name}`")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only the invoker sees the message.
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    /// The one message every failed invocation gets.
    pub fn failure(command: &str) -> Self {
        Self::public(format!("Failed to process command {command}."))
    }

    pub fn into_message(self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content(self.content)
            .ephemeral(self.ephemeral)
    }
}
