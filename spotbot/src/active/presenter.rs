use std::sync::Arc;

use eyre::{Result, WrapErr};
use futures::{
    future::{self, BoxFuture},
    stream::{BoxStream, StreamExt},
};
use spotbot_util::MessageBuilder;
use twilight_model::{
    application::interaction::{Interaction, InteractionData},
    channel::message::{Component, MessageFlags},
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
    id::{
        marker::{ChannelMarker, InteractionMarker, MessageMarker, UserMarker},
        Id,
    },
};

use crate::{
    core::Context,
    util::{interaction::InteractionCommand, InteractionCommandExt},
};

/// Identifies a displayed message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageHandle {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// A button press on a displayed message.
#[derive(Clone, Debug)]
pub struct ComponentPress {
    pub id: Id<InteractionMarker>,
    pub token: String,
    pub user_id: Id<UserMarker>,
    pub custom_id: String,
}

impl ComponentPress {
    fn from_interaction(interaction: Interaction) -> Option<Self> {
        let user_id = interaction.author_id()?;

        let Some(InteractionData::MessageComponent(data)) = interaction.data else {
            return None;
        };

        Some(Self {
            id: interaction.id,
            token: interaction.token,
            user_id,
            custom_id: data.custom_id,
        })
    }
}

/// Displays messages and relays the button presses on them.
pub trait Presenter: Send + Sync + 'static {
    /// Display the message as response to the originating command.
    fn show(&self, builder: MessageBuilder<'static>) -> BoxFuture<'_, Result<MessageHandle>>;

    /// Button presses on the message in the order they arrive.
    ///
    /// The stream ends only when the presenter shuts down.
    fn subscribe(&self, handle: MessageHandle) -> BoxStream<'static, ComponentPress>;

    /// Replace the pressed message's content and components in response to
    /// the press.
    fn update<'a>(
        &'a self,
        press: &'a ComponentPress,
        builder: MessageBuilder<'static>,
    ) -> BoxFuture<'a, Result<()>>;

    /// Respond to the press without changing the message.
    fn acknowledge<'a>(&'a self, press: &'a ComponentPress) -> BoxFuture<'a, Result<()>>;

    /// Respond to the press with a notice only its presser can see.
    fn reject<'a>(&'a self, press: &'a ComponentPress, content: &'a str)
        -> BoxFuture<'a, Result<()>>;

    /// Replace the components of the message without responding to any press.
    fn disable(
        &self,
        handle: MessageHandle,
        components: Vec<Component>,
    ) -> BoxFuture<'_, Result<()>>;
}

/// Presents through the response of a deferred slash command.
pub struct InteractionPresenter {
    ctx: Arc<Context>,
    command: InteractionCommand,
}

impl InteractionPresenter {
    pub fn new(ctx: Arc<Context>, command: InteractionCommand) -> Self {
        Self { ctx, command }
    }

    fn respond<'a>(
        &'a self,
        press: &'a ComponentPress,
        response: InteractionResponse,
    ) -> BoxFuture<'a, Result<()>> {
        let fut = async move {
            self.ctx
                .interaction()
                .create_response(press.id, &press.token, &response)
                .await
                .wrap_err("Failed to respond to component")?;

            Ok(())
        };

        Box::pin(fut)
    }
}

impl Presenter for InteractionPresenter {
    fn show(&self, builder: MessageBuilder<'static>) -> BoxFuture<'_, Result<MessageHandle>> {
        let fut = async move {
            let msg = self.command.update(&self.ctx, &builder).await?;

            Ok(MessageHandle {
                channel_id: msg.channel_id,
                message_id: msg.id,
            })
        };

        Box::pin(fut)
    }

    fn subscribe(&self, handle: MessageHandle) -> BoxStream<'static, ComponentPress> {
        self.ctx
            .standby
            .wait_for_component_stream(handle.message_id, |_: &Interaction| true)
            .filter_map(|interaction| future::ready(ComponentPress::from_interaction(interaction)))
            .boxed()
    }

    fn update<'a>(
        &'a self,
        press: &'a ComponentPress,
        builder: MessageBuilder<'static>,
    ) -> BoxFuture<'a, Result<()>> {
        let data = InteractionResponseData {
            components: builder.components,
            content: builder.content.map(|content| content.into_owned()),
            embeds: builder.embed.map(|embed| vec![embed]),
            ..Default::default()
        };

        let response = InteractionResponse {
            kind: InteractionResponseType::UpdateMessage,
            data: Some(data),
        };

        self.respond(press, response)
    }

    fn acknowledge<'a>(&'a self, press: &'a ComponentPress) -> BoxFuture<'a, Result<()>> {
        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredUpdateMessage,
            data: None,
        };

        self.respond(press, response)
    }

    fn reject<'a>(
        &'a self,
        press: &'a ComponentPress,
        content: &'a str,
    ) -> BoxFuture<'a, Result<()>> {
        let data = InteractionResponseData {
            content: Some(content.to_owned()),
            flags: Some(MessageFlags::EPHEMERAL),
            ..Default::default()
        };

        let response = InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data),
        };

        self.respond(press, response)
    }

    fn disable(
        &self,
        handle: MessageHandle,
        components: Vec<Component>,
    ) -> BoxFuture<'_, Result<()>> {
        let fut = async move {
            self.ctx
                .http
                .update_message(handle.channel_id, handle.message_id)
                .components(Some(&components))
                .wrap_err("Invalid components")?
                .await
                .wrap_err("Failed to remove components")?;

            Ok(())
        };

        Box::pin(fut)
    }
}
