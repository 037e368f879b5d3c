use std::borrow::Cow;

use twilight_model::channel::message::{Component, Embed};

use super::EmbedBuilder;

#[derive(Clone, Debug, Default)]
pub struct MessageBuilder<'c> {
    pub content: Option<Cow<'c, str>>,
    pub embed: Option<Embed>,
    pub components: Option<Vec<Component>>,
}

impl<'c> MessageBuilder<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Cow<'c, str>>) -> Self {
        self.content = Some(content.into());

        self
    }

    pub fn embed(mut self, embed: impl IntoEmbed) -> Self {
        self.embed = Some(embed.into_embed());

        self
    }

    pub fn components(mut self, components: Vec<Component>) -> Self {
        self.components = Some(components);

        self
    }
}

pub trait IntoEmbed {
    fn into_embed(self) -> Embed;
}

impl IntoEmbed for Embed {
    #[inline]
    fn into_embed(self) -> Embed {
        self
    }
}

impl IntoEmbed for EmbedBuilder {
    #[inline]
    fn into_embed(self) -> Embed {
        self.build()
    }
}

impl IntoEmbed for String {
    #[inline]
    fn into_embed(self) -> Embed {
        EmbedBuilder::new().description(self).build()
    }
}

impl IntoEmbed for &str {
    #[inline]
    fn into_embed(self) -> Embed {
        EmbedBuilder::new().description(self).build()
    }
}
