use std::sync::Arc;

use eyre::Result;
use spotbot_macros::SlashCommand;
use spotbot_model::Vehicle;
use spotbot_psql::model::{NewSighting, SightingScope};
use spotbot_util::{
    constants::{FINNIK_URL, KENTEKENCHECK_URL, LICENSE_NOT_FOUND},
    license, MessageBuilder,
};
use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::{
    channel::message::{
        component::{ActionRow, Button, ButtonStyle},
        Component,
    },
    id::{
        marker::{GuildMarker, UserMarker},
        Id,
    },
};

use self::backend::{CommandReply, LookupReply, SightingStore, VehicleInfo};
use crate::{
    core::{BotConfig, Context},
    embeds::{EmbedData, LookupEmbed},
    util::{interaction::InteractionCommand, Authored, InteractionCommandExt},
};

mod backend;

#[derive(CommandModel, CreateCommand, SlashCommand)]
#[command(name = "kt", desc = "Zoekt een kenteken op")]
#[flags(SKIP_DEFER)]
pub struct Kt {
    #[command(rename = "kenteken", desc = "Het kenteken om op te zoeken")]
    license: String,
    #[command(desc = "Voeg een comment toe aan je spot", max_length = 256)]
    comment: String,
}

async fn slash_kt(ctx: Arc<Context>, mut command: InteractionCommand) -> Result<()> {
    let args = Kt::from_interaction(command.input_data())?;

    let spot = Spot {
        input: &args.license,
        comment: &args.comment,
        user_id: command.user_id()?,
        guild_id: command.guild_id,
        prior_limit: BotConfig::get().sightings.prior_limit,
    };

    let reply = CommandReply::new(&ctx, &command);

    lookup_and_record(ctx.client(), &**ctx.psql(), &reply, spot).await
}

struct Spot<'a> {
    input: &'a str,
    comment: &'a str,
    user_id: Id<UserMarker>,
    guild_id: Option<Id<GuildMarker>>,
    prior_limit: usize,
}

/// Look up the plate, reply with what was found, and record the sighting.
///
/// An invalid plate is rejected before anything is looked up or stored.
/// Every valid plate is recorded, whether the registry knows it or not.
async fn lookup_and_record(
    info: &impl VehicleInfo,
    store: &impl SightingStore,
    reply: &impl LookupReply,
    spot: Spot<'_>,
) -> Result<()> {
    let license = match license::parse(spot.input) {
        Ok(license) => license,
        Err(err) => {
            debug!(%err, "Rejected lookup");

            return reply.invalid().await;
        }
    };

    reply.defer().await?;

    let scope = SightingScope::new(spot.guild_id, spot.user_id);

    let (vehicle_res, fuel_res, prior_res) = tokio::join!(
        info.vehicle(&license),
        info.fuels(&license),
        store.prior(&license, scope, spot.prior_limit),
    );

    let builder = match vehicle_res? {
        Some(vehicle) => {
            let fuels = fuel_res?;
            let prior = prior_res?;

            if let Err(err) = store.upsert_vehicle(&Vehicle::new(&vehicle, &fuels)).await {
                error!(?err, %license, "Failed to store vehicle");
            }

            let embed = LookupEmbed::new(&vehicle, &fuels, &prior);

            MessageBuilder::new()
                .embed(embed.build())
                .components(link_buttons(&license))
        }
        None => MessageBuilder::new().content(LICENSE_NOT_FOUND),
    };

    let reply_res = reply.reply(builder).await;

    let comment = Some(spot.comment.trim()).filter(|comment| !comment.is_empty());

    let sighting = NewSighting {
        license: &license,
        comment,
        user_id: spot.user_id,
        guild_id: spot.guild_id,
    };

    if let Err(err) = store.insert_sighting(&sighting).await {
        error!(?err, %license, "Failed to record sighting");
    }

    reply_res
}

fn link_buttons(license: &str) -> Vec<Component> {
    let link = |label: &str, url: String| {
        Component::Button(Button {
            custom_id: None,
            disabled: false,
            emoji: None,
            label: Some(label.to_owned()),
            style: ButtonStyle::Link,
            url: Some(url),
        })
    };

    let components = vec![
        link("Kentekencheck", format!("{KENTEKENCHECK_URL}{license}")),
        link("Finnik", format!("{FINNIK_URL}{license}/gratis")),
    ];

    vec![Component::ActionRow(ActionRow { components })]
}
