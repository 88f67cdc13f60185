mod io;
mod log;

pub use io::*;
pub use log::*;
