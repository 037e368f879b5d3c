#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Site {
    RdwFuel,
    RdwVehicle,
}

impl Site {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RdwFuel => "RdwFuel",
            Self::RdwVehicle => "RdwVehicle",
        }
    }
}
