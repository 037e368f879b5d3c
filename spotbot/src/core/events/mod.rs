use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use eyre::{Report, Result};
use twilight_gateway::{Event, Shard};
use twilight_model::user::User;

use self::interaction::handle_interaction;
use super::Context;
use crate::util::Authored;

mod interaction;

enum EventKind {
    Component,
    SlashCommand,
}

impl EventKind {
    fn log<A: Authored>(self, ctx: &Context, orig: &A, name: &str) {
        fn log(kind: EventKind, location: &EventLocation, user: Result<&User>, name: &str) {
            let username = user.map_or("<unknown user>", |u| u.name.as_str());

            info!("[{location}] {username} {kind} `{name}`");
        }

        let location = EventLocation::new(ctx, orig);
        log(self, &location, orig.user(), name);
    }
}

impl Display for EventKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Component => f.write_str("used component"),
            Self::SlashCommand => f.write_str("used slash command"),
        }
    }
}

enum EventLocation {
    Private,
    UncachedGuild,
    UncachedChannel { guild: String },
    Cached { guild: String, channel: String },
}

impl EventLocation {
    fn new<A: Authored>(ctx: &Context, orig: &A) -> Self {
        let Some(guild_id) = orig.guild_id() else {
            return Self::Private;
        };

        let Some(guild) = ctx.cache.guild(guild_id).map(|guild| guild.name().to_owned()) else {
            return Self::UncachedGuild;
        };

        let channel = ctx
            .cache
            .channel(orig.channel_id())
            .and_then(|channel| channel.name.clone());

        match channel {
            Some(channel) => Self::Cached { guild, channel },
            None => Self::UncachedChannel { guild },
        }
    }
}

impl Display for EventLocation {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EventLocation::Private => f.write_str("Private"),
            EventLocation::UncachedGuild => f.write_str("<uncached guild>"),
            EventLocation::UncachedChannel { guild } => write!(f, "{guild}:<uncached channel>"),
            EventLocation::Cached { guild, channel } => write!(f, "{guild}:{channel}"),
        }
    }
}

pub async fn event_loop(ctx: Arc<Context>, shard: &mut Shard) {
    loop {
        let event = match shard.next_event().await {
            Ok(event) => event,
            Err(err) => {
                let is_fatal = err.is_fatal();
                error!("{:?}", Report::new(err).wrap_err("Event error"));

                if is_fatal {
                    return;
                }

                continue;
            }
        };

        ctx.standby.process(&event);
        ctx.cache.update(&event);
        let ctx = Arc::clone(&ctx);

        tokio::spawn(async move {
            if let Err(err) = handle_event(ctx, event).await {
                error!("{:?}", err.wrap_err("Failed to handle event"));
            }
        });
    }
}

async fn handle_event(ctx: Arc<Context>, event: Event) -> Result<()> {
    match event {
        Event::GatewayClose(Some(frame)) => {
            warn!(
                "Received closing frame: reason={} (code {})",
                frame.reason, frame.code,
            )
        }
        Event::GatewayClose(None) => warn!("Received closing frame"),
        Event::GatewayInvalidateSession(true) => {
            warn!("Gateway has invalidated session, but its reconnectable")
        }
        Event::GatewayInvalidateSession(false) => warn!("Gateway has invalidated session"),
        Event::GatewayReconnect => info!("Gateway requested shard to reconnect"),
        Event::InteractionCreate(e) => handle_interaction(ctx, e.0).await,
        Event::Ready(ready) => {
            info!(
                guilds = ready.guilds.len(),
                "Shard is ready as {}",
                ready.user.name,
            )
        }
        Event::Resumed => info!("Shard is resumed"),
        _ => {}
    }

    Ok(())
}
