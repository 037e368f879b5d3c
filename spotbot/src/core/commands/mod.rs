pub use self::flags::CommandFlags;

mod flags;

pub mod interaction;
