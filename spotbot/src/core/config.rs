use std::{env, time::Duration};

use eyre::Result;
use once_cell::sync::OnceCell;
use twilight_model::id::{marker::GuildMarker, Id};

static CONFIG: OnceCell<BotConfig> = OnceCell::new();

#[derive(Debug)]
pub struct BotConfig {
    pub database_url: Box<str>,
    pub tokens: Tokens,
    pub dev_guild: Id<GuildMarker>,
    pub sightings: SightingsConfig,
}

#[derive(Debug)]
pub struct Tokens {
    pub discord: Box<str>,
}

#[derive(Copy, Clone, Debug)]
pub struct SightingsConfig {
    /// Amount of sightings on a single page
    pub per_page: usize,
    /// Inactivity after which a sightings pagination stops listening
    pub timeout: Duration,
    /// Amount of previous sightings shown on a lookup
    pub prior_limit: usize,
}

impl Default for SightingsConfig {
    fn default() -> Self {
        Self {
            per_page: 5,
            timeout: Duration::from_secs(300),
            prior_limit: 5,
        }
    }
}

impl BotConfig {
    pub fn get() -> &'static Self {
        CONFIG
            .get()
            .expect("`BotConfig::init` must be called first")
    }

    pub fn init() -> Result<()> {
        let default = SightingsConfig::default();

        let per_page: usize = env_var_or("SIGHTINGS_PER_PAGE", default.per_page)?;

        if per_page == 0 {
            bail!("env variable `SIGHTINGS_PER_PAGE` must be positive");
        }

        let timeout_secs: u64 = env_var_or("SIGHTINGS_TIMEOUT_SECS", default.timeout.as_secs())?;

        let config = BotConfig {
            database_url: env_var("DATABASE_URL")?,
            tokens: Tokens {
                discord: env_var("DISCORD_TOKEN")?,
            },
            dev_guild: env_var("DEV_GUILD_ID")?,
            sightings: SightingsConfig {
                per_page,
                timeout: Duration::from_secs(timeout_secs),
                prior_limit: env_var_or("PRIOR_SIGHTINGS_LIMIT", default.prior_limit)?,
            },
        };

        if CONFIG.set(config).is_err() {
            warn!("CONFIG was already set");
        }

        Ok(())
    }
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: |$arg:ident| $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: |s| { Ok(s.into_boxed_str()) },
    u64: |s| { s.parse().map_err(|_| s) },
    usize: |s| { s.parse().map_err(|_| s) },
    Id<GuildMarker>: |s| { s.parse().ok().and_then(Id::new_checked).ok_or(s) },
}

fn env_var<T: EnvKind>(name: &str) -> Result<T> {
    let value = env::var(name).map_err(|_| eyre!("missing env variable `{name}`"))?;

    parse_env(name, value)
}

/// Like [`env_var`] but falls back to `default` if the variable is not set.
fn env_var_or<T: EnvKind>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => parse_env(name, value),
        Err(_) => Ok(default),
    }
}

fn parse_env<T: EnvKind>(name: &str, value: String) -> Result<T> {
    T::from_str(value).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected {expected}",
            expected = T::EXPECTED
        )
    })
}
