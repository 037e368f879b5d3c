pub mod lookup;
pub mod sightings;
pub mod status;
