use spotbot_util::{numbers::kw_to_horsepower, string::title_case};

use crate::{RdwFuel, RdwVehicle};

/// Vehicle facts that are stored alongside sightings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub license: String,
    pub brand: Option<String>,
    pub trade_name: Option<String>,
    pub color: Option<String>,
    pub price: Option<u32>,
    pub fuel_type: Option<String>,
    pub horsepower: Option<u32>,
}

impl Vehicle {
    /// Combine RDW's vehicle entry with its fuel entries.
    ///
    /// The primary fuel is the one with the lowest index and the horsepower
    /// is summed over all engines that report their power.
    pub fn new(vehicle: &RdwVehicle, fuels: &[RdwFuel]) -> Self {
        let fuel_type = fuels
            .iter()
            .min_by_key(|fuel| fuel.index.unwrap_or(u32::MAX))
            .and_then(|fuel| fuel.description.clone());

        let horsepower = fuels
            .iter()
            .filter_map(|fuel| fuel.power)
            .map(kw_to_horsepower)
            .fold(None, |sum, hp| Some(sum.unwrap_or(0) + hp));

        Self {
            license: vehicle.license.clone(),
            brand: vehicle.brand.clone(),
            trade_name: vehicle.trade_name.clone(),
            color: vehicle.color.clone(),
            price: vehicle.price,
            fuel_type,
            horsepower,
        }
    }

    /// Title cased `Brand TradeName`, skipping whichever is missing.
    ///
    /// Returns `None` if neither is known.
    pub fn display_name(&self) -> Option<String> {
        let name = match (self.brand.as_deref(), self.trade_name.as_deref()) {
            (Some(brand), Some(trade_name)) => {
                // RDW sometimes prefixes the trade name with the brand
                let trade_name = trade_name
                    .strip_prefix(brand)
                    .map(str::trim_start)
                    .filter(|rest| !rest.is_empty())
                    .unwrap_or(trade_name);

                format!("{brand} {trade_name}")
            }
            (Some(name), None) | (None, Some(name)) => name.to_owned(),
            (None, None) => return None,
        };

        Some(title_case(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rdw_vehicle() -> RdwVehicle {
        RdwVehicle {
            license: "AB12CD".to_owned(),
            brand: Some("TOYOTA".to_owned()),
            trade_name: Some("TOYOTA YARIS".to_owned()),
            color: Some("ROOD".to_owned()),
            price: Some(21_995),
            first_admission: None,
        }
    }

    fn fuel(index: u32, description: &str, power: Option<f32>) -> RdwFuel {
        RdwFuel {
            license: "AB12CD".to_owned(),
            index: Some(index),
            description: Some(description.to_owned()),
            power,
        }
    }

    #[test]
    fn combines_engines() {
        let fuels = [
            fuel(2, "Elektriciteit", Some(59.0)),
            fuel(1, "Benzine", Some(68.0)),
        ];

        let vehicle = Vehicle::new(&rdw_vehicle(), &fuels);

        assert_eq!(vehicle.fuel_type.as_deref(), Some("Benzine"));
        assert_eq!(
            vehicle.horsepower,
            Some(kw_to_horsepower(59.0) + kw_to_horsepower(68.0))
        );
        assert_eq!(vehicle.price, Some(21_995));
    }

    #[test]
    fn no_fuel_data() {
        let vehicle = Vehicle::new(&rdw_vehicle(), &[]);

        assert!(vehicle.fuel_type.is_none());
        assert!(vehicle.horsepower.is_none());
    }

    #[test]
    fn display_name_strips_duplicate_brand() {
        let vehicle = Vehicle::new(&rdw_vehicle(), &[]);

        assert_eq!(vehicle.display_name().as_deref(), Some("Toyota Yaris"));
    }

    #[test]
    fn display_name_partial() {
        let vehicle = Vehicle {
            trade_name: Some("GOLF".to_owned()),
            ..Default::default()
        };

        assert_eq!(vehicle.display_name().as_deref(), Some("Golf"));
        assert!(Vehicle::default().display_name().is_none());
    }
}
