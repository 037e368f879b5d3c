use std::time::Duration;

use spotbot_macros::EmbedData;
use spotbot_util::{constants::UNKNOWN, datetime::HumanDuration};
use twilight_model::channel::message::embed::EmbedField;

#[derive(EmbedData)]
pub struct StatusEmbed {
    fields: Vec<EmbedField>,
    title: &'static str,
}

impl StatusEmbed {
    pub fn new(
        bot_uptime: Duration,
        host_uptime: Option<Duration>,
        guilds: usize,
        latency: Duration,
    ) -> Self {
        let field = |name: &str, value: String| EmbedField {
            inline: false,
            name: name.to_owned(),
            value,
        };

        let host_uptime = host_uptime.map_or_else(
            || UNKNOWN.to_owned(),
            |uptime| HumanDuration(uptime).to_string(),
        );

        let fields = vec![
            field("Bot uptime", HumanDuration(bot_uptime).to_string()),
            field("Server uptime", host_uptime),
            field("Guild count", guilds.to_string()),
            field("Ping", format!("{} ms", latency.as_millis())),
        ];

        Self {
            fields,
            title: "Status",
        }
    }
}
