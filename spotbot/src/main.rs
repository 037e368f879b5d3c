#[macro_use]
extern crate tracing;

#[macro_use]
extern crate eyre;

mod active;
mod commands;
mod core;
mod embeds;
mod util;

use std::sync::Arc;

use eyre::{Result, WrapErr};
use tokio::{runtime::Builder as RuntimeBuilder, signal};
use twilight_gateway::CloseFrame;

use crate::core::{
    commands::interaction::InteractionCommands, event_loop, logging, BotConfig, Context,
};

fn main() {
    let runtime = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Could not build runtime");

    if let Err(err) = dotenvy::dotenv() {
        panic!("Failed to prepare .env variables: {err}");
    }

    let _log_worker_guard = logging::init();

    if let Err(source) = runtime.block_on(async_main()) {
        error!(?source, "Critical error in main");
    }
}

async fn async_main() -> Result<()> {
    BotConfig::init().wrap_err("Failed to initialize config")?;

    let (ctx, mut shard) = Context::new().await.wrap_err("Failed to create context")?;
    let ctx = Arc::new(ctx);

    ctx.psql().migrate().await?;

    let slash_commands = InteractionCommands::get().collect();
    info!("Setting {} slash commands...", slash_commands.len());

    if cfg!(feature = "global_slash") {
        ctx.set_global_commands(slash_commands).await?;

        if let Err(err) = ctx.set_guild_commands(Vec::new()).await {
            warn!(?err, "Failed to remove guild commands");
        }
    } else {
        ctx.set_guild_commands(slash_commands).await?;

        if let Err(err) = ctx.set_global_commands(Vec::new()).await {
            warn!(?err, "Failed to remove global commands");
        }
    }

    tokio::select! {
        _ = event_loop(Arc::clone(&ctx), &mut shard) => error!("Event loop ended"),
        res = signal::ctrl_c() => match res {
            Ok(_) => info!("Received Ctrl+C"),
            Err(err) => error!(?err, "Failed to await Ctrl+C"),
        }
    }

    if let Err(err) = shard.close(CloseFrame::NORMAL).await {
        warn!(?err, "Failed to close shard");
    }

    info!("Shutting down");

    Ok(())
}
