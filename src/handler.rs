use crate::AppState;
use crate::commands::{CommandRegistry, Invocation, reply_for};
use serenity::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::EventHandler;
use tracing::{error, info, warn};

pub struct Handler {
    pub registry: CommandRegistry,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target = "dispatch", command = %command.data.name, "missing_app_state");
            return;
        };

        let invocation = Invocation::from_interaction(&command);
        info!(
            target = "dispatch",
            command = %invocation.command,
            user_id = invocation.user_id.get(),
            "Running command"
        );
        let Some(outcome) = self.registry.dispatch(&app_state, &invocation).await else {
            warn!(target = "dispatch", command = %invocation.command, "unknown command");
            return;
        };
        let reply = reply_for(&invocation.command, outcome);

        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(reply.into_message()))
            .await
        {
            error!(target = "dispatch", command = %invocation.command, error = ?e, "create_response failed");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
        match Command::set_global_commands(&ctx.http, self.registry.definitions()).await {
            Ok(registered) => info!(
                target = "dispatch",
                count = registered.len(),
                "registered global commands"
            ),
            Err(e) => error!(target = "dispatch", error = ?e, "failed to register global commands"),
        }
    }
}
