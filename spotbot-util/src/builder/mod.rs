pub use self::{embed::EmbedBuilder, footer::FooterBuilder, message::MessageBuilder};

mod embed;
mod footer;
mod message;
