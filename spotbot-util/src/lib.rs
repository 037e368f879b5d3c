mod builder;

pub mod constants;
pub mod datetime;
pub mod license;
pub mod numbers;
pub mod string;

pub use self::builder::{EmbedBuilder, FooterBuilder, MessageBuilder};
