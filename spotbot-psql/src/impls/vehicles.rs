use eyre::{Result, WrapErr};
use spotbot_model::Vehicle;

use crate::Database;

impl Database {
    pub async fn upsert_vehicle(&self, vehicle: &Vehicle) -> Result<()> {
        let Vehicle {
            license,
            brand,
            trade_name,
            color,
            price,
            fuel_type,
            horsepower,
        } = vehicle;

        let query = sqlx::query!(
            r#"
INSERT INTO vehicles (
  license, brand, trade_name, color, price,
  primary_fuel_type, total_horsepower
)
VALUES
  ($1, $2, $3, $4, $5, $6, $7) ON CONFLICT (license) DO
UPDATE
SET
  brand = $2,
  trade_name = $3,
  color = $4,
  price = $5,
  primary_fuel_type = $6,
  total_horsepower = $7,
  updated_at = NOW()"#,
            license.as_str(),
            brand.as_deref(),
            trade_name.as_deref(),
            color.as_deref(),
            price.map(|price| price as i32),
            fuel_type.as_deref(),
            horsepower.map(|hp| hp as i32)
        );

        query
            .execute(self)
            .await
            .wrap_err("Failed to execute query")?;

        Ok(())
    }
}
