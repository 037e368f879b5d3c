use eyre::{Result, WrapErr};
use futures::future::BoxFuture;
use spotbot_client::Client;
use spotbot_model::{RdwFuel, RdwVehicle, Vehicle};
use spotbot_psql::{
    model::{NewSighting, Sighting, SightingScope},
    Database,
};
use spotbot_util::{constants::INVALID_LICENSE, MessageBuilder};

use crate::{
    core::Context,
    util::{interaction::InteractionCommand, InteractionCommandExt},
};

/// Vehicle registry lookups.
pub trait VehicleInfo: Send + Sync {
    fn vehicle<'a>(&'a self, license: &'a str) -> BoxFuture<'a, Result<Option<RdwVehicle>>>;

    fn fuels<'a>(&'a self, license: &'a str) -> BoxFuture<'a, Result<Vec<RdwFuel>>>;
}

impl VehicleInfo for Client {
    fn vehicle<'a>(&'a self, license: &'a str) -> BoxFuture<'a, Result<Option<RdwVehicle>>> {
        Box::pin(async move {
            self.rdw_vehicle(license)
                .await
                .wrap_err("Failed to get vehicle")
        })
    }

    fn fuels<'a>(&'a self, license: &'a str) -> BoxFuture<'a, Result<Vec<RdwFuel>>> {
        Box::pin(async move { self.rdw_fuel(license).await.wrap_err("Failed to get fuels") })
    }
}

/// Persistence of vehicles and their sightings.
pub trait SightingStore: Send + Sync {
    fn prior<'a>(
        &'a self,
        license: &'a str,
        scope: SightingScope,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Sighting>>>;

    fn upsert_vehicle<'a>(&'a self, vehicle: &'a Vehicle) -> BoxFuture<'a, Result<()>>;

    fn insert_sighting<'a>(&'a self, sighting: &'a NewSighting<'a>) -> BoxFuture<'a, Result<()>>;
}

impl SightingStore for Database {
    fn prior<'a>(
        &'a self,
        license: &'a str,
        scope: SightingScope,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Sighting>>> {
        Box::pin(async move {
            self.select_plate_sightings(license, scope, limit)
                .await
                .wrap_err("Failed to get prior sightings")
        })
    }

    fn upsert_vehicle<'a>(&'a self, vehicle: &'a Vehicle) -> BoxFuture<'a, Result<()>> {
        Box::pin(Database::upsert_vehicle(self, vehicle))
    }

    fn insert_sighting<'a>(&'a self, sighting: &'a NewSighting<'a>) -> BoxFuture<'a, Result<()>> {
        Box::pin(Database::insert_sighting(self, sighting))
    }
}

/// Responses to the invoking user.
pub trait LookupReply: Send + Sync {
    /// Privately tell the user their plate is invalid. Nothing was responded
    /// before.
    fn invalid(&self) -> BoxFuture<'_, Result<()>>;

    fn defer(&self) -> BoxFuture<'_, Result<()>>;

    /// Must only be called after deferring.
    fn reply(&self, builder: MessageBuilder<'static>) -> BoxFuture<'_, Result<()>>;
}

pub struct CommandReply<'c> {
    ctx: &'c Context,
    command: &'c InteractionCommand,
}

impl<'c> CommandReply<'c> {
    pub fn new(ctx: &'c Context, command: &'c InteractionCommand) -> Self {
        Self { ctx, command }
    }
}

impl LookupReply for CommandReply<'_> {
    fn invalid(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.command
                .error_callback(self.ctx, INVALID_LICENSE)
                .await
                .wrap_err("Failed to reject license")?;

            Ok(())
        })
    }

    fn defer(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.command
                .defer(self.ctx, false)
                .await
                .wrap_err("Failed to defer")?;

            Ok(())
        })
    }

    fn reply(&self, builder: MessageBuilder<'static>) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.command.update(self.ctx, &builder).await?;

            Ok(())
        })
    }
}
