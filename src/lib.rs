pub mod cmd;
pub mod config;
pub mod driver;
pub mod error;
pub mod record;
pub mod util;
pub mod visit;
