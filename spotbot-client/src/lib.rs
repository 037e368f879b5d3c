#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

mod client;
mod error;
mod rdw;
mod site;

pub use self::{client::Client, error::ClientError};

use self::site::Site;

static MY_USER_AGENT: &str = env!("CARGO_PKG_NAME");
