//! Fixture configuration (command line + environment).
//!
//! Usage: `gilded-rose [DAYS] [--json|--text]`. When DAYS is not given on the
//! command line, `GILDED_ROSE_DAYS` is consulted before falling back to the
//! default of two days.

use thiserror::Error;

/// Environment variable holding the default number of days.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number of days: {value:?} (expected a non-negative integer)")]
    InvalidDays { value: String },

    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    #[error("unexpected argument: {value:?}")]
    UnexpectedArgument { value: String },
}

/// How each day is written out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub days: u32,
    pub format: OutputFormat,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::default(),
        }
    }
}

impl FixtureConfig {
    /// Build a config from command line arguments only (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::resolve(args, None)
    }

    /// Build a config from arguments, falling back to `env_days` for the day
    /// count when no positional argument is given.
    pub fn resolve<I, S>(args: I, env_days: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = None;
        let mut format = OutputFormat::default();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--json" => format = OutputFormat::Json,
                "--text" => format = OutputFormat::Text,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
                value if days.is_none() => days = Some(parse_days(value)?),
                value => {
                    return Err(ConfigError::UnexpectedArgument {
                        value: value.to_string(),
                    });
                }
            }
        }

        let days = match (days, env_days) {
            (Some(days), _) => days,
            (None, Some(raw)) => parse_days(raw)?,
            (None, None) => DEFAULT_DAYS,
        };

        Ok(Self { days, format })
    }
}

fn parse_days(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidDays {
            value: raw.to_string(),
        })
}
