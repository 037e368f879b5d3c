// Colors
pub const BLURPLE: u32 = 0x5865F2;
pub const RED: u32 = 0xE74C3C;

// Message field sizes
pub const FIELD_VALUE_SIZE: usize = 1024;

// Vehicle sites
pub const BRAND_LOGO_URL: &str = "https://www.kentekencheck.nl/assets/img/brands/";
pub const KENTEKENCHECK_URL: &str = "https://kentekencheck.nl/kenteken?i=";
pub const FINNIK_URL: &str = "https://finnik.nl/kenteken/";

// Error messages
pub const GENERAL_ISSUE: &str = "Er ging iets mis, probeer het later nog eens";
pub const INVALID_LICENSE: &str = "Dat is geen geldig kenteken";
pub const LICENSE_NOT_FOUND: &str = "Ik kon dat kenteken niet vinden";
pub const NOT_YOUR_BUTTONS: &str = "Deze knoppen zijn niet voor jou!";

// Misc
pub const UNKNOWN: &str = "Onbekend";
