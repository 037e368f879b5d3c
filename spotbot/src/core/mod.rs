pub use self::{
    config::{BotConfig, SightingsConfig},
    context::Context,
    events::event_loop,
};

mod config;
mod context;
mod events;

pub mod commands;
pub mod logging;
