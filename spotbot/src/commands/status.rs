use std::{sync::Arc, time::Duration};

use eyre::{Result, WrapErr};
use spotbot_macros::SlashCommand;
use spotbot_util::MessageBuilder;
use time::OffsetDateTime;
use tokio::{fs, time::Instant};
use twilight_interactions::command::CreateCommand;

use crate::{
    core::Context,
    embeds::{EmbedData, StatusEmbed},
    util::{interaction::InteractionCommand, InteractionCommandExt},
};

#[derive(CreateCommand, SlashCommand)]
#[command(name = "status", desc = "Toont de status van de bot")]
#[flags(SKIP_DEFER)]
pub struct Status;

async fn slash_status(ctx: Arc<Context>, command: InteractionCommand) -> Result<()> {
    let start = Instant::now();
    command.defer(&ctx, false).await.wrap_err("Failed to defer")?;
    let latency = start.elapsed();

    let bot_uptime: Duration = (OffsetDateTime::now_utc() - ctx.start_time())
        .try_into()
        .unwrap_or_default();

    let host_uptime = match fs::read_to_string("/proc/uptime").await {
        Ok(content) => parse_uptime(&content),
        Err(err) => {
            debug!(?err, "Failed to read host uptime");

            None
        }
    };

    let guilds = ctx.cache.stats().guilds();
    let embed = StatusEmbed::new(bot_uptime, host_uptime, guilds, latency);
    let builder = MessageBuilder::new().embed(embed.build());
    command.update(&ctx, &builder).await?;

    Ok(())
}

/// The first value of `/proc/uptime` is the system's uptime in seconds.
fn parse_uptime(content: &str) -> Option<Duration> {
    let secs = content.split_whitespace().next()?.parse().ok()?;

    Duration::try_from_secs_f64(secs).ok()
}
