use std::{mem, sync::Arc};

use eyre::{Result, WrapErr};
use spotbot_util::{
    constants::{GENERAL_ISSUE, RED},
    EmbedBuilder,
};
use twilight_model::{
    channel::message::MessageFlags,
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
    id::{marker::InteractionMarker, Id},
};

use crate::{
    core::{
        commands::interaction::{InteractionCommands, SlashCommand},
        events::EventKind,
        Context,
    },
    util::{interaction::InteractionCommand, InteractionCommandExt},
};

pub async fn handle_command(ctx: Arc<Context>, mut command: InteractionCommand) {
    let name = mem::take(&mut command.data.name);
    EventKind::SlashCommand.log(&ctx, &command, &name);

    let Some(slash) = InteractionCommands::get().command(&name) else {
        return error!("Unknown slash command `{name}`");
    };

    match process_command(ctx, command, slash).await {
        Ok(_) => info!("Processed slash command `{}`", slash.name),
        Err(err) => {
            let wrap = format!("Failed to process slash command `{name}`");
            error!("{:?}", err.wrap_err(wrap));
        }
    }
}

async fn process_command(
    ctx: Arc<Context>,
    command: InteractionCommand,
    slash: &SlashCommand,
) -> Result<()> {
    if slash.flags.defer() {
        command.defer(&ctx, slash.flags.ephemeral()).await?;
    }

    let id = command.id;
    let token = command.token.clone();

    if let Err(err) = (slash.exec)(Arc::clone(&ctx), command).await {
        if let Err(notify_err) = notify_error(&ctx, id, &token).await {
            warn!(?notify_err, "Failed to inform user about error");
        }

        return Err(err);
    }

    Ok(())
}

/// Let the user know something went wrong.
///
/// Commands that skip deferring may not have responded yet in which case
/// editing the response fails and a fresh response is sent instead.
async fn notify_error(ctx: &Context, id: Id<InteractionMarker>, token: &str) -> Result<()> {
    let embed = EmbedBuilder::new()
        .description(GENERAL_ISSUE)
        .color(RED)
        .build();

    let update_res = ctx
        .interaction()
        .update_response(token)
        .embeds(Some(&[embed.clone()]))
        .wrap_err("Invalid embed")?
        .await;

    if update_res.is_ok() {
        return Ok(());
    }

    let data = InteractionResponseData {
        embeds: Some(vec![embed]),
        flags: Some(MessageFlags::EPHEMERAL),
        ..Default::default()
    };

    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(data),
    };

    ctx.interaction()
        .create_response(id, token, &response)
        .await
        .wrap_err("Failed to create error response")?;

    Ok(())
}
