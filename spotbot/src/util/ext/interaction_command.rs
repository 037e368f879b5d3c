use std::{borrow::Cow, future::IntoFuture, mem, slice};

use eyre::{Result, WrapErr};
use futures::future::BoxFuture;
use spotbot_util::{constants::RED, EmbedBuilder, MessageBuilder};
use twilight_http::response::{marker::EmptyBody, ResponseFuture};
use twilight_interactions::command::CommandInputData;
use twilight_model::{
    channel::{message::MessageFlags, Message},
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
};

use crate::{core::Context, util::interaction::InteractionCommand};

pub trait InteractionCommandExt {
    /// Extract input data containing options and resolved values
    fn input_data(&mut self) -> CommandInputData<'static>;

    /// Ackownledge the command but don't respond yet.
    ///
    /// Must use [`InteractionCommandExt::update`] afterwards!
    fn defer(&self, ctx: &Context, ephemeral: bool) -> ResponseFuture<EmptyBody>;

    /// After having already ackowledged the command via
    /// [`InteractionCommandExt::defer`], use this to update the response.
    fn update<'a>(
        &'a self,
        ctx: &'a Context,
        builder: &'a MessageBuilder<'_>,
    ) -> BoxFuture<'a, Result<Message>>;

    /// Respond to a command with some content in a private red embed.
    ///
    /// Be sure the command was **not** deferred beforehand.
    fn error_callback(&self, ctx: &Context, content: impl Into<String>)
        -> ResponseFuture<EmptyBody>;
}

impl InteractionCommandExt for InteractionCommand {
    #[inline]
    fn input_data(&mut self) -> CommandInputData<'static> {
        CommandInputData {
            options: mem::take(&mut self.data.options),
            resolved: self.data.resolved.take().map(Cow::Owned),
        }
    }

    #[inline]
    fn defer(&self, ctx: &Context, ephemeral: bool) -> ResponseFuture<EmptyBody> {
        let data = InteractionResponseData {
            flags: ephemeral.then_some(MessageFlags::EPHEMERAL),
            ..Default::default()
        };

        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: Some(data),
        };

        ctx.interaction()
            .create_response(self.id, &self.token, &response)
            .into_future()
    }

    fn update<'a>(
        &'a self,
        ctx: &'a Context,
        builder: &'a MessageBuilder<'_>,
    ) -> BoxFuture<'a, Result<Message>> {
        Box::pin(async move {
            let client = ctx.interaction();

            let req = client
                .update_response(&self.token)
                .content(builder.content.as_deref())
                .wrap_err("Invalid content")?
                .embeds(builder.embed.as_ref().map(slice::from_ref))
                .wrap_err("Invalid embed")?
                .components(builder.components.as_deref())
                .wrap_err("Invalid components")?;

            req.await
                .wrap_err("Failed to update response")?
                .model()
                .await
                .wrap_err("Failed to deserialize response")
        })
    }

    #[inline]
    fn error_callback(
        &self,
        ctx: &Context,
        content: impl Into<String>,
    ) -> ResponseFuture<EmptyBody> {
        let embed = EmbedBuilder::new().description(content).color(RED).build();

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
            .create_response(self.id, &self.token, &response)
            .into_future()
    }
}
