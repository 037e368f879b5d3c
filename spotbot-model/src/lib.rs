mod deser;
mod rdw;
mod vehicle;

pub use self::{
    rdw::{RdwFuel, RdwVehicle},
    vehicle::Vehicle,
};
