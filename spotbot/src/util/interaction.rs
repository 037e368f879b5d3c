use twilight_model::{
    application::interaction::{
        application_command::CommandData, message_component::MessageComponentInteractionData,
    },
    guild::PartialMember,
    id::{
        marker::{ChannelMarker, GuildMarker, InteractionMarker},
        Id,
    },
    user::User,
};

#[derive(Debug)]
pub struct InteractionCommand {
    pub channel_id: Id<ChannelMarker>,
    pub data: Box<CommandData>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<InteractionMarker>,
    pub member: Option<PartialMember>,
    pub token: String,
    pub user: Option<User>,
}

#[derive(Debug)]
pub struct InteractionComponent {
    pub channel_id: Id<ChannelMarker>,
    pub data: MessageComponentInteractionData,
    pub guild_id: Option<Id<GuildMarker>>,
    pub member: Option<PartialMember>,
    pub user: Option<User>,
}
