use spotbot_model::Vehicle;
use time::OffsetDateTime;
use twilight_model::id::{
    marker::{GuildMarker, UserMarker},
    Id,
};

/// A sighting row LEFT JOINed with its vehicle.
pub struct DbSighting {
    pub sighting_id: i64,
    pub license: String,
    pub comment: Option<String>,
    pub created_at: OffsetDateTime,
    pub discord_user_id: i64,
    pub discord_guild_id: Option<i64>,
    pub vehicle_license: Option<String>,
    pub brand: Option<String>,
    pub trade_name: Option<String>,
    pub color: Option<String>,
    pub price: Option<i32>,
    pub primary_fuel_type: Option<String>,
    pub total_horsepower: Option<i32>,
}

#[derive(Clone, Debug)]
pub struct Sighting {
    pub sighting_id: i64,
    pub license: String,
    pub comment: Option<String>,
    pub created_at: OffsetDateTime,
    pub user_id: Id<UserMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub vehicle: Option<Vehicle>,
}

impl From<DbSighting> for Sighting {
    #[inline]
    fn from(sighting: DbSighting) -> Self {
        let DbSighting {
            sighting_id,
            license,
            comment,
            created_at,
            discord_user_id,
            discord_guild_id,
            vehicle_license,
            brand,
            trade_name,
            color,
            price,
            primary_fuel_type,
            total_horsepower,
        } = sighting;

        let vehicle = vehicle_license.map(|license| Vehicle {
            license,
            brand,
            trade_name,
            color,
            price: price.map(|price| price as u32),
            fuel_type: primary_fuel_type,
            horsepower: total_horsepower.map(|hp| hp as u32),
        });

        Self {
            sighting_id,
            license,
            comment: comment.filter(|comment| !comment.is_empty()),
            created_at,
            user_id: Id::new(discord_user_id as u64),
            guild_id: discord_guild_id.map(|id| Id::new(id as u64)),
            vehicle,
        }
    }
}

/// Data required to record a sighting.
pub struct NewSighting<'a> {
    pub license: &'a str,
    pub comment: Option<&'a str>,
    pub user_id: Id<UserMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn db_sighting() -> DbSighting {
        DbSighting {
            sighting_id: 3,
            license: "AB12CD".to_owned(),
            comment: Some("mooie kleur".to_owned()),
            created_at: datetime!(2023-10-18 12:00 UTC),
            discord_user_id: 12,
            discord_guild_id: None,
            vehicle_license: None,
            brand: None,
            trade_name: None,
            color: None,
            price: None,
            primary_fuel_type: None,
            total_horsepower: None,
        }
    }

    #[test]
    fn without_vehicle() {
        let sighting = Sighting::from(db_sighting());

        assert!(sighting.vehicle.is_none());
        assert!(sighting.guild_id.is_none());
        assert_eq!(sighting.user_id, Id::new(12));
        assert_eq!(sighting.comment.as_deref(), Some("mooie kleur"));
    }

    #[test]
    fn with_vehicle() {
        let row = DbSighting {
            discord_guild_id: Some(99),
            vehicle_license: Some("AB12CD".to_owned()),
            brand: Some("OPEL".to_owned()),
            price: Some(19_000),
            total_horsepower: Some(101),
            comment: Some(String::new()),
            ..db_sighting()
        };

        let sighting = Sighting::from(row);
        let vehicle = sighting.vehicle.unwrap();

        assert_eq!(sighting.guild_id, Some(Id::new(99)));
        assert!(sighting.comment.is_none());
        assert_eq!(vehicle.brand.as_deref(), Some("OPEL"));
        assert_eq!(vehicle.price, Some(19_000));
        assert_eq!(vehicle.horsepower, Some(101));
        assert!(vehicle.trade_name.is_none());
    }
}
