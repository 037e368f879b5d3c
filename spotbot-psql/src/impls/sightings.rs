use eyre::{Result, WrapErr};
use futures::StreamExt;

use crate::{
    model::{DbSighting, NewSighting, Sighting, SightingScope},
    Database,
};

impl Database {
    pub async fn count_sightings(&self, scope: SightingScope) -> Result<u64> {
        let count = match scope {
            SightingScope::Guild(guild) => {
                sqlx::query_scalar!(
                    r#"
SELECT
  COUNT(*) AS "count!"
FROM
  sightings
WHERE
  discord_guild_id = $1"#,
                    guild.get() as i64
                )
                .fetch_one(self)
                .await
            }
            SightingScope::User(user) => {
                sqlx::query_scalar!(
                    r#"
SELECT
  COUNT(*) AS "count!"
FROM
  sightings
WHERE
  discord_user_id = $1"#,
                    user.get() as i64
                )
                .fetch_one(self)
                .await
            }
        };

        let count = count.wrap_err("Failed to fetch one")?;

        Ok(count as u64)
    }

    /// Newest first; sightings with equal timestamps are ordered by
    /// insertion, latest first.
    ///
    /// An offset beyond the last sighting yields an empty list.
    pub async fn select_sightings(
        &self,
        scope: SightingScope,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Sighting>> {
        let mut rows = match scope {
            SightingScope::Guild(guild) => sqlx::query_as!(
                DbSighting,
                r#"
SELECT
  s.sighting_id,
  s.license,
  s.comment,
  s.created_at,
  s.discord_user_id,
  s.discord_guild_id,
  v.license AS vehicle_license,
  v.brand,
  v.trade_name,
  v.color,
  v.price,
  v.primary_fuel_type,
  v.total_horsepower
FROM
  sightings AS s
  LEFT JOIN vehicles AS v ON s.license = v.license
WHERE
  s.discord_guild_id = $1
ORDER BY
  s.created_at DESC,
  s.sighting_id DESC
LIMIT
  $2
OFFSET
  $3"#,
                guild.get() as i64,
                limit as i64,
                offset as i64
            )
            .fetch(self),
            SightingScope::User(user) => sqlx::query_as!(
                DbSighting,
                r#"
SELECT
  s.sighting_id,
  s.license,
  s.comment,
  s.created_at,
  s.discord_user_id,
  s.discord_guild_id,
  v.license AS vehicle_license,
  v.brand,
  v.trade_name,
  v.color,
  v.price,
  v.primary_fuel_type,
  v.total_horsepower
FROM
  sightings AS s
  LEFT JOIN vehicles AS v ON s.license = v.license
WHERE
  s.discord_user_id = $1
ORDER BY
  s.created_at DESC,
  s.sighting_id DESC
LIMIT
  $2
OFFSET
  $3"#,
                user.get() as i64,
                limit as i64,
                offset as i64
            )
            .fetch(self),
        };

        let mut sightings = Vec::with_capacity(limit);

        while let Some(row_res) = rows.next().await {
            let row = row_res.wrap_err("Failed to get next")?;
            sightings.push(row.into());
        }

        Ok(sightings)
    }

    /// Most recent sightings of a single plate within the scope.
    pub async fn select_plate_sightings(
        &self,
        license: &str,
        scope: SightingScope,
        limit: usize,
    ) -> Result<Vec<Sighting>> {
        let rows = match scope {
            SightingScope::Guild(guild) => {
                sqlx::query_as!(
                    DbSighting,
                    r#"
SELECT
  s.sighting_id,
  s.license,
  s.comment,
  s.created_at,
  s.discord_user_id,
  s.discord_guild_id,
  v.license AS vehicle_license,
  v.brand,
  v.trade_name,
  v.color,
  v.price,
  v.primary_fuel_type,
  v.total_horsepower
FROM
  sightings AS s
  LEFT JOIN vehicles AS v ON s.license = v.license
WHERE
  s.license = $1
  AND s.discord_guild_id = $2
ORDER BY
  s.created_at DESC,
  s.sighting_id DESC
LIMIT
  $3"#,
                    license,
                    guild.get() as i64,
                    limit as i64
                )
                .fetch_all(self)
                .await
            }
            SightingScope::User(user) => {
                sqlx::query_as!(
                    DbSighting,
                    r#"
SELECT
  s.sighting_id,
  s.license,
  s.comment,
  s.created_at,
  s.discord_user_id,
  s.discord_guild_id,
  v.license AS vehicle_license,
  v.brand,
  v.trade_name,
  v.color,
  v.price,
  v.primary_fuel_type,
  v.total_horsepower
FROM
  sightings AS s
  LEFT JOIN vehicles AS v ON s.license = v.license
WHERE
  s.license = $1
  AND s.discord_user_id = $2
ORDER BY
  s.created_at DESC,
  s.sighting_id DESC
LIMIT
  $3"#,
                    license,
                    user.get() as i64,
                    limit as i64
                )
                .fetch_all(self)
                .await
            }
        };

        let rows = rows.wrap_err("Failed to fetch all")?;

        Ok(rows.into_iter().map(Sighting::from).collect())
    }

    pub async fn insert_sighting(&self, sighting: &NewSighting<'_>) -> Result<()> {
        let NewSighting {
            license,
            comment,
            user_id,
            guild_id,
        } = sighting;

        let query = sqlx::query!(
            r#"
INSERT INTO sightings (
  license, comment, discord_user_id,
  discord_guild_id
)
VALUES
  ($1, $2, $3, $4)"#,
            *license,
            *comment,
            user_id.get() as i64,
            guild_id.map(|id| id.get() as i64)
        );

        query
            .execute(self)
            .await
            .wrap_err("Failed to execute query")?;

        debug!(license, user = user_id.get(), "Inserted sighting");

        Ok(())
    }
}
