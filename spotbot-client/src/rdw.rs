use serde::de::DeserializeOwned;
use spotbot_model::{RdwFuel, RdwVehicle};

use crate::{site::Site, Client, ClientError};

const VEHICLE_URL: &str = "https://opendata.rdw.nl/resource/m9d7-ebf2.json";
const FUEL_URL: &str = "https://opendata.rdw.nl/resource/8ys7-d773.json";

impl Client {
    /// Registration data of a normalized license plate.
    ///
    /// Returns `Ok(None)` if RDW does not know the plate.
    pub async fn rdw_vehicle(&self, license: &str) -> Result<Option<RdwVehicle>, ClientError> {
        let url = format!("{VEHICLE_URL}?kenteken={license}");
        let bytes = self.make_get_request(url, Site::RdwVehicle).await?;

        parse_entries(&bytes, "vehicle").map(|vehicles| vehicles.into_iter().next())
    }

    /// Fuel entries of a normalized license plate, one per engine.
    pub async fn rdw_fuel(&self, license: &str) -> Result<Vec<RdwFuel>, ClientError> {
        let url = format!("{FUEL_URL}?kenteken={license}");
        let bytes = self.make_get_request(url, Site::RdwFuel).await?;

        parse_entries(&bytes, "fuel")
    }
}

fn parse_entries<T: DeserializeOwned>(bytes: &[u8], kind: &str) -> Result<Vec<T>, ClientError> {
    serde_json::from_slice(bytes).map_err(|err| {
        let body = String::from_utf8_lossy(bytes);
        let wrap = format!("Failed to deserialize rdw {kind}: {body}");

        ClientError::Report(eyre::Report::new(err).wrap_err(wrap))
    })
}
