use std::sync::Arc;

use twilight_model::application::interaction::{Interaction, InteractionData, InteractionType};

use self::{command::handle_command, component::handle_component};
use crate::{
    core::Context,
    util::interaction::{InteractionCommand, InteractionComponent},
};

mod command;
mod component;

pub async fn handle_interaction(ctx: Arc<Context>, interaction: Interaction) {
    let Interaction {
        channel,
        data,
        guild_id,
        id,
        kind,
        member,
        token,
        user,
        ..
    } = interaction;

    let Some(channel_id) = channel.map(|channel| channel.id) else {
        return warn!(?kind, "No channel id for interaction");
    };

    match data {
        Some(InteractionData::ApplicationCommand(data)) => {
            let cmd = InteractionCommand {
                channel_id,
                data,
                guild_id,
                id,
                member,
                token,
                user,
            };

            match kind {
                InteractionType::ApplicationCommand => handle_command(ctx, cmd).await,
                _ => warn!(?kind, "Got unexpected interaction"),
            }
        }
        Some(InteractionData::MessageComponent(data)) => {
            let component = InteractionComponent {
                channel_id,
                data,
                guild_id,
                member,
                user,
            };

            handle_component(&ctx, component)
        }
        _ => {}
    }
}
