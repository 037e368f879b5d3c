mod scope;
mod sighting;

pub use self::{
    scope::SightingScope,
    sighting::{DbSighting, NewSighting, Sighting},
};
