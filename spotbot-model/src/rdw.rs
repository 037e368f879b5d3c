use serde::Deserialize;
use time::OffsetDateTime;

use crate::deser::{option_compact_date, option_f32_string, option_u32_string};

/// Entry of RDW's registered vehicles dataset (`m9d7-ebf2`).
#[derive(Clone, Debug, Deserialize)]
pub struct RdwVehicle {
    #[serde(rename = "kenteken")]
    pub license: String,
    #[serde(default, rename = "merk")]
    pub brand: Option<String>,
    #[serde(default, rename = "handelsbenaming")]
    pub trade_name: Option<String>,
    #[serde(default, rename = "eerste_kleur")]
    pub color: Option<String>,
    #[serde(default, rename = "catalogusprijs", with = "option_u32_string")]
    pub price: Option<u32>,
    #[serde(
        default,
        rename = "datum_eerste_toelating",
        with = "option_compact_date"
    )]
    pub first_admission: Option<OffsetDateTime>,
}

/// Entry of RDW's fuel dataset (`8ys7-d773`).
///
/// A vehicle has one entry per engine, e.g. hybrids have two.
#[derive(Clone, Debug, Deserialize)]
pub struct RdwFuel {
    #[serde(rename = "kenteken")]
    pub license: String,
    #[serde(default, rename = "brandstof_volgnummer", with = "option_u32_string")]
    pub index: Option<u32>,
    #[serde(default, rename = "brandstof_omschrijving")]
    pub description: Option<String>,
    /// Net maximum power in kW
    #[serde(default, rename = "nettomaximumvermogen", with = "option_f32_string")]
    pub power: Option<f32>,
}
