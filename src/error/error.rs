use thiserror::Error;

pub type Res<T> = Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Failed to read or write a roster file.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Roster file is not valid TOML or does not match the roster layout.
    #[error("{path}: {message}")]
    Parse { path: String, message: String },
}

impl RosterError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.to_owned(),
            source,
        }
    }

    pub fn parse(path: &str, message: &str) -> Self {
        RosterError::Parse {
            path: path.to_owned(),
            message: message.trim_end().to_owned(),
        }
    }
}
