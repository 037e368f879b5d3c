use std::sync::Arc;

use eyre::Result;
use spotbot_macros::SlashCommand;
use spotbot_psql::model::SightingScope;
use twilight_interactions::command::CreateCommand;

use crate::{
    active::{pagination::SightingsPagination, InteractionPresenter},
    core::{BotConfig, Context},
    util::{interaction::InteractionCommand, Authored},
};

#[derive(CreateCommand, SlashCommand)]
#[command(name = "sightings", desc = "Bekijk al je eerdere spots")]
pub struct Sightings;

async fn slash_sightings(ctx: Arc<Context>, command: InteractionCommand) -> Result<()> {
    let owner = command.user_id()?;
    let scope = SightingScope::new(command.guild_id, owner);
    let config = BotConfig::get().sightings;

    let source = Arc::clone(ctx.psql());
    let presenter = InteractionPresenter::new(ctx, command);

    SightingsPagination::begin(source, presenter, owner, scope, config).await?;

    Ok(())
}
