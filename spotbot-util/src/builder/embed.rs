use time::OffsetDateTime;
use twilight_model::{
    channel::message::embed::{Embed, EmbedField, EmbedThumbnail},
    util::Timestamp,
};

use super::FooterBuilder;
use crate::constants::BLURPLE;

#[derive(Clone, Debug)]
pub struct EmbedBuilder(Embed);

impl Default for EmbedBuilder {
    fn default() -> Self {
        Self(Embed {
            author: None,
            color: Some(BLURPLE),
            description: None,
            fields: Vec::new(),
            footer: None,
            image: None,
            kind: String::new(),
            provider: None,
            thumbnail: None,
            timestamp: None,
            title: None,
            url: None,
            video: None,
        })
    }
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> Embed {
        self.0.kind.push_str("rich");

        self.0
    }

    pub fn color(mut self, color: u32) -> Self {
        self.0.color = Some(color);

        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());

        self
    }

    pub fn fields(mut self, fields: Vec<EmbedField>) -> Self {
        self.0.fields = fields;

        self
    }

    pub fn footer(mut self, footer: impl Into<FooterBuilder>) -> Self {
        self.0.footer = Some(footer.into().build());

        self
    }

    /// Discord rejects thumbnails with an empty url so those are skipped.
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        let url = thumbnail.into();

        if !url.is_empty() {
            self.0.thumbnail = Some(EmbedThumbnail {
                height: None,
                proxy_url: None,
                url,
                width: None,
            });
        }

        self
    }

    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.0.timestamp = Timestamp::from_secs(timestamp.unix_timestamp()).ok();

        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());

        self
    }
}
