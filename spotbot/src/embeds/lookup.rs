use std::fmt::Write;

use spotbot_macros::EmbedData;
use spotbot_model::{RdwFuel, RdwVehicle, Vehicle};
use spotbot_psql::model::Sighting;
use spotbot_util::{
    constants::{BRAND_LOGO_URL, FIELD_VALUE_SIZE, UNKNOWN},
    datetime::DiscordTimestamp,
    license,
    numbers::{kw_to_horsepower, Currency},
    string::{snake_case, title_case},
};
use twilight_model::channel::message::embed::EmbedField;

use super::truncate;

const SEPARATOR: &str = "  -  ";

#[derive(EmbedData)]
pub struct LookupEmbed {
    description: String,
    fields: Vec<EmbedField>,
    footer: String,
    thumbnail: String,
    title: String,
}

impl LookupEmbed {
    /// `prior`: Earlier sightings of the same plate, newest first
    pub fn new(vehicle: &RdwVehicle, fuels: &[RdwFuel], prior: &[Sighting]) -> Self {
        let title = Vehicle::new(vehicle, fuels)
            .display_name()
            .unwrap_or_else(|| UNKNOWN.to_owned());

        let mut fuels: Vec<_> = fuels.iter().collect();
        fuels.sort_unstable_by_key(|fuel| fuel.index.unwrap_or(u32::MAX));

        let engines: Vec<_> = fuels.into_iter().map(engine_description).collect();

        let color = vehicle.color.as_deref().map_or_else(|| UNKNOWN.to_owned(), title_case);

        let mut meta = vec![format!("🎨 {color}")];

        match vehicle.price.filter(|&price| price > 0) {
            Some(price) => meta.push(format!("💵 {}", Currency(price))),
            None => meta.push(format!("💵 {UNKNOWN}")),
        }

        if let Some(date) = vehicle.first_admission {
            meta.push(format!("🗓️ {}", DiscordTimestamp::short_date(date)));
        }

        let mut description = engines.join(SEPARATOR);

        if !description.is_empty() {
            description.push('\n');
        }

        description.push_str(&meta.join(SEPARATOR));

        let thumbnail = vehicle
            .brand
            .as_deref()
            .map(|brand| format!("{BRAND_LOGO_URL}{}.png", snake_case(brand)))
            .unwrap_or_default();

        let mut fields = Vec::new();

        if !prior.is_empty() {
            fields.push(EmbedField {
                inline: false,
                name: "Eerder gespot door".to_owned(),
                value: prior_summary(prior),
            });
        }

        Self {
            description,
            fields,
            footer: license::format(&vehicle.license).into_owned(),
            thumbnail,
            title,
        }
    }
}

fn engine_description(fuel: &RdwFuel) -> String {
    let kind = fuel.description.as_deref().map_or_else(|| UNKNOWN.to_owned(), title_case);

    match fuel.power {
        Some(kw) => format!("⛽ {kind}: 🐎 {} PK", kw_to_horsepower(kw)),
        None => format!("⛽ {kind}"),
    }
}

/// One line per sighting: who spotted it, when, and their comment.
fn prior_summary(prior: &[Sighting]) -> String {
    let mut summary = String::with_capacity(prior.len() * 48);

    for sighting in prior {
        if !summary.is_empty() {
            summary.push('\n');
        }

        let _ = write!(
            summary,
            "<@{}> {}",
            sighting.user_id,
            DiscordTimestamp::relative(sighting.created_at)
        );

        if let Some(ref comment) = sighting.comment {
            let _ = write!(summary, " - *{comment}*");
        }
    }

    truncate(summary, FIELD_VALUE_SIZE)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use twilight_model::id::Id;

    use super::*;
    use crate::embeds::EmbedData;

    fn vehicle() -> RdwVehicle {
        RdwVehicle {
            license: "AB12CD".to_owned(),
            brand: Some("MERCEDES-BENZ".to_owned()),
            trade_name: Some("C 300 E".to_owned()),
            color: Some("ZWART".to_owned()),
            price: Some(58_400),
            first_admission: Some(datetime!(2021-04-20 0:00 UTC)),
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

    fn prior(user: u64, comment: Option<&str>) -> Sighting {
        Sighting {
            sighting_id: 1,
            license: "AB12CD".to_owned(),
            comment: comment.map(str::to_owned),
            created_at: datetime!(2021-04-20 16:20 UTC),
            user_id: Id::new(user),
            guild_id: Some(Id::new(3)),
            vehicle: None,
        }
    }

    #[test]
    fn full_lookup() {
        let fuels = [
            fuel(2, "ELEKTRICITEIT", Some(90.0)),
            fuel(1, "BENZINE", Some(150.0)),
        ];

        let prior = [prior(5, Some("weer die")), prior(6, None)];
        let embed = LookupEmbed::new(&vehicle(), &fuels, &prior).build();

        assert_eq!(embed.title.as_deref(), Some("Mercedes-Benz C 300 E"));
        assert_eq!(
            embed.description.as_deref(),
            Some(
                "⛽ Benzine: 🐎 204 PK  -  ⛽ Elektriciteit: 🐎 123 PK\n\
                🎨 Zwart  -  💵 € 58.400  -  🗓️ <t:1618876800:d>"
            )
        );
        assert_eq!(
            embed.thumbnail.map(|thumbnail| thumbnail.url).as_deref(),
            Some("https://www.kentekencheck.nl/assets/img/brands/mercedes_benz.png")
        );
        assert_eq!(
            embed.footer.map(|footer| footer.text).as_deref(),
            Some("AB-12-CD")
        );

        let [field] = embed.fields.as_slice() else {
            panic!("expected one field");
        };

        assert_eq!(field.name, "Eerder gespot door");
        assert_eq!(
            field.value,
            "<@5> <t:1618935600:R> - *weer die*\n<@6> <t:1618935600:R>"
        );
    }

    #[test]
    fn sparse_lookup() {
        let vehicle = RdwVehicle {
            brand: None,
            color: None,
            price: None,
            first_admission: None,
            ..vehicle()
        };

        let embed = LookupEmbed::new(&vehicle, &[], &[]).build();

        assert_eq!(embed.title.as_deref(), Some("C 300 E"));
        assert_eq!(
            embed.description.as_deref(),
            Some("🎨 Onbekend  -  💵 Onbekend")
        );
        assert!(embed.thumbnail.is_none());
        assert!(embed.fields.is_empty());
    }
}
