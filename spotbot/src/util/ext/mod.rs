pub use self::{authored::Authored, interaction_command::InteractionCommandExt};

mod authored;
mod interaction_command;
