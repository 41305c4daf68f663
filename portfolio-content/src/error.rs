/// Errors raised while loading content or talking to the preference store.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A TOML source could not be deserialized.
    Parse {
        source: String,
        msg: String,
    },
    /// The site config parsed but holds an unusable value.
    InvalidConfig {
        field: &'static str,
        msg: String,
    },
    /// The preference store refused a read or write.
    Storage {
        msg: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse { source, msg } => {
                write!(f, "Cannot parse {}: {}", source, msg)?;
            }
            Error::InvalidConfig { field, msg } => {
                write!(f, "Invalid config value `{}`: {}", field, msg)?;
            }
            Error::Storage { msg } => {
                write!(f, "Preference store error: {}", msg)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
