#[macro_use]
extern crate tracing;

pub use self::database::Database;

mod database;
mod impls;

pub mod model;
