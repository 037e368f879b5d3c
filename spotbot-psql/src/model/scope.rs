use twilight_model::id::{
    marker::{GuildMarker, UserMarker},
    Id,
};

/// Whose sightings a history view covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SightingScope {
    Guild(Id<GuildMarker>),
    User(Id<UserMarker>),
}

impl SightingScope {
    /// Server context takes precedence over the invoking user.
    pub fn new(guild: Option<Id<GuildMarker>>, user: Id<UserMarker>) -> Self {
        match guild {
            Some(guild) => Self::Guild(guild),
            None => Self::User(user),
        }
    }

    pub fn is_guild(self) -> bool {
        matches!(self, Self::Guild(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_takes_precedence() {
        let user = Id::new(2);

        assert_eq!(
            SightingScope::new(Some(Id::new(1)), user),
            SightingScope::Guild(Id::new(1))
        );
        assert_eq!(SightingScope::new(None, user), SightingScope::User(user));
    }
}
