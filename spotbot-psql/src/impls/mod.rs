mod sightings;
mod vehicles;
