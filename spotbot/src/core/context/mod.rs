use std::sync::Arc;

use eyre::{Result, WrapErr};
use spotbot_client::Client as SpotClient;
use spotbot_psql::Database;
use time::OffsetDateTime;
use twilight_cache_inmemory::{InMemoryCache, ResourceType};
use twilight_gateway::{Config, Intents, Shard, ShardId};
use twilight_http::{client::InteractionClient, Client};
use twilight_model::{
    channel::message::AllowedMentions,
    gateway::{
        payload::outgoing::update_presence::UpdatePresencePayload,
        presence::{ActivityType, MinimalActivity, Status},
    },
    id::{marker::ApplicationMarker, Id},
};
use twilight_standby::Standby;

use crate::core::BotConfig;

mod set_commands;

pub struct Context {
    pub cache: InMemoryCache,
    pub http: Arc<Client>,
    pub standby: Standby,
    data: ContextData,
    clients: Clients,
}

impl Context {
    pub fn interaction(&self) -> InteractionClient<'_> {
        self.http.interaction(self.data.application_id)
    }

    pub fn psql(&self) -> &Arc<Database> {
        &self.clients.psql
    }

    /// Returns the RDW client
    pub fn client(&self) -> &SpotClient {
        &self.clients.custom
    }

    pub fn start_time(&self) -> OffsetDateTime {
        self.data.start_time
    }

    pub async fn new() -> Result<(Self, Shard)> {
        let config = BotConfig::get();
        let discord_token = config.tokens.discord.to_string();

        // Mentions in embeds, e.g. of prior spotters, must not ping anyone
        let mentions = AllowedMentions {
            replied_user: true,
            ..Default::default()
        };

        let http = Client::builder()
            .token(discord_token.clone())
            .remember_invalid_token(false)
            .default_allowed_mentions(mentions)
            .build();

        let http = Arc::new(http);

        let current_user = http
            .current_user()
            .await
            .wrap_err("Failed to get current user")?
            .model()
            .await
            .wrap_err("Failed to deserialize current user")?;

        let application_id = current_user.id.cast();

        info!("Connecting to Discord as {}...", current_user.name);

        let psql = Database::new(&config.database_url).wrap_err("Failed to create database")?;
        let custom = SpotClient::new().wrap_err("Failed to create client")?;

        let cache = InMemoryCache::builder()
            .resource_types(ResourceType::GUILD | ResourceType::CHANNEL | ResourceType::USER_CURRENT)
            .build();

        let shard = build_shard(discord_token)?;

        let ctx = Self {
            cache,
            http,
            standby: Standby::new(),
            data: ContextData {
                application_id,
                start_time: OffsetDateTime::now_utc(),
            },
            clients: Clients {
                psql: Arc::new(psql),
                custom,
            },
        };

        Ok((ctx, shard))
    }
}

fn build_shard(token: String) -> Result<Shard> {
    let activity = MinimalActivity {
        kind: ActivityType::Playing,
        name: "/kt <kenteken>".to_owned(),
        url: None,
    };

    let presence = UpdatePresencePayload::new(vec![activity.into()], false, None, Status::Online)
        .wrap_err("Failed to create presence")?;

    let intents = Intents::GUILDS;

    let config = Config::builder(token, intents).presence(presence).build();

    Ok(Shard::with_config(ShardId::ONE, config))
}

struct Clients {
    custom: SpotClient,
    psql: Arc<Database>,
}

struct ContextData {
    application_id: Id<ApplicationMarker>,
    start_time: OffsetDateTime,
}
