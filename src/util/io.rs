use std::fs;

use tracing::debug;

use crate::error::{Res, RosterError};

/// Write file at given filepath with content.
pub fn write_file<C>(filepath: &str, content: C) -> Res<()>
where
    C: AsRef<[u8]>,
{
    debug!("Writing file: {}", filepath);
    fs::write(filepath, content).map_err(|err| RosterError::io(filepath, err))
}

pub fn file_exists(filepath: &str) -> bool {
    fs::exists(filepath).unwrap_or(false)
}
