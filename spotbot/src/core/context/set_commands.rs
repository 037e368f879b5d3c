use eyre::{Result, WrapErr};
use twilight_model::application::command::Command;

use super::Context;
use crate::core::BotConfig;

impl Context {
    #[cold]
    pub async fn set_global_commands(&self, cmds: Vec<Command>) -> Result<()> {
        let cmds = self
            .interaction()
            .set_global_commands(&cmds)
            .await
            .wrap_err("Failed to set commands")?
            .models()
            .await
            .wrap_err("Failed to deserialize commands")?;

        debug!("Registered {} commands", cmds.len());

        Ok(())
    }

    #[cold]
    pub async fn set_guild_commands(&self, cmds: Vec<Command>) -> Result<()> {
        let cmds = self
            .interaction()
            .set_guild_commands(BotConfig::get().dev_guild, &cmds)
            .await
            .wrap_err("Failed to set commands")?
            .models()
            .await
            .wrap_err("Failed to deserialize commands")?;

        debug!("Registered {} commands", cmds.len());

        Ok(())
    }
}
