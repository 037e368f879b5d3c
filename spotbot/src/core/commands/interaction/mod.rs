use std::pin::Pin;

use eyre::Result;
use futures::Future;
use once_cell::sync::OnceCell;
use radix_trie::{Trie, TrieCommon};
use twilight_model::application::command::Command;

pub use self::command::SlashCommand;
use crate::commands::{lookup::*, sightings::*, status::*};

mod command;

macro_rules! interaction_trie {
    ( $( $cmd:ident => $fun:ident ,)* ) => {{
        use twilight_interactions::command::CreateCommand;

        let mut trie = Trie::new();

        $( trie.insert($cmd::NAME, &$fun); )*

        InteractionCommands(trie)
    }};
}

static INTERACTION_COMMANDS: OnceCell<InteractionCommands> = OnceCell::new();

pub struct InteractionCommands(Trie<&'static str, &'static SlashCommand>);

pub type CommandResult = Pin<Box<dyn Future<Output = Result<()>> + 'static + Send>>;

impl InteractionCommands {
    pub fn get() -> &'static Self {
        INTERACTION_COMMANDS.get_or_init(|| {
            interaction_trie! {
                Kt => KT_SLASH,
                Sightings => SIGHTINGS_SLASH,
                Status => STATUS_SLASH,
            }
        })
    }

    pub fn command(&self, command: &str) -> Option<&'static SlashCommand> {
        self.0.get(command).copied()
    }

    pub fn collect(&self) -> Vec<Command> {
        self.0.values().map(|cmd| (cmd.create)().into()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_commands() {
        let commands = InteractionCommands::get();
        let names: Vec<_> = commands.0.keys().copied().collect();

        assert_eq!(names, ["kt", "sightings", "status"]);
        assert!(commands.command("kt").is_some());
        assert!(commands.command("k").is_none());
    }

    #[test]
    fn command_definitions() {
        let cmds = InteractionCommands::get().collect();

        let kt = cmds.iter().find(|cmd| cmd.name == "kt").unwrap();
        let options: Vec<_> = kt.options.iter().map(|option| option.name.as_str()).collect();
        assert_eq!(options, ["kenteken", "comment"]);
    }
}
