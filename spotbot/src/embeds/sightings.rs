use std::fmt::Write;

use spotbot_macros::EmbedData;
use spotbot_model::Vehicle;
use spotbot_psql::model::{Sighting, SightingScope};
use spotbot_util::{
    constants::{FIELD_VALUE_SIZE, UNKNOWN},
    datetime::DiscordTimestamp,
    license,
    numbers::Currency,
    string::title_case,
};
use time::OffsetDateTime;
use twilight_model::channel::message::embed::EmbedField;

use super::truncate;
use crate::active::pagination::Pages;

#[derive(EmbedData)]
pub struct SightingsEmbed {
    description: String,
    fields: Vec<EmbedField>,
    timestamp: OffsetDateTime,
    title: &'static str,
}

impl SightingsEmbed {
    pub fn new(sightings: &[Sighting], pages: &Pages, total: u64, scope: SightingScope) -> Self {
        let kind = if scope.is_guild() {
            "Server"
        } else {
            "Persoonlijke"
        };

        let description = format!(
            "{kind} spots - Pagina {} van {} ({total} totaal)",
            pages.curr_page(),
            pages.last_page(),
        );

        Self {
            description,
            fields: sightings.iter().map(sighting_field).collect(),
            timestamp: OffsetDateTime::now_utc(),
            title: "🚗 Jouw Spots",
        }
    }
}

fn sighting_field(sighting: &Sighting) -> EmbedField {
    let license = license::format(&sighting.license);
    let mut value = String::with_capacity(128);

    match sighting.vehicle {
        Some(ref vehicle) => {
            let _ = writeln!(value, "**{}**", vehicle_name(vehicle));

            let details = vehicle_details(vehicle);

            if !details.is_empty() {
                value.push_str(&details);
                value.push('\n');
            }
        }
        None => {
            let _ = writeln!(value, "**Kenteken:** {license}");
        }
    }

    let _ = write!(value, "⏰ {}", DiscordTimestamp::relative(sighting.created_at));

    if let Some(ref comment) = sighting.comment {
        let _ = write!(value, "\n💬 *{comment}*");
    }

    EmbedField {
        inline: false,
        name: license.into_owned(),
        value: truncate(value, FIELD_VALUE_SIZE),
    }
}

fn vehicle_name(vehicle: &Vehicle) -> String {
    match (vehicle.brand.is_some(), vehicle.display_name()) {
        (true, Some(name)) => name,
        (false, Some(trade_name)) => format!("{UNKNOWN} {trade_name}"),
        (_, None) => UNKNOWN.to_owned(),
    }
}

/// Known facts joined by ` • ` in a fixed order.
fn vehicle_details(vehicle: &Vehicle) -> String {
    let color = vehicle
        .color
        .as_deref()
        .map(|color| format!("🎨 {}", title_case(color)));

    let price = vehicle
        .price
        .filter(|&price| price > 0)
        .map(|price| format!("💵 {}", Currency(price)));

    let fuel = vehicle
        .fuel_type
        .as_deref()
        .map(|fuel| format!("⛽ {}", title_case(fuel)));

    let horsepower = vehicle
        .horsepower
        .filter(|&hp| hp > 0)
        .map(|hp| format!("🐎 {hp} PK"));

    let mut details = String::new();

    for detail in [color, price, fuel, horsepower].into_iter().flatten() {
        if !details.is_empty() {
            details.push_str(" • ");
        }

        details.push_str(&detail);
    }

    details
}
