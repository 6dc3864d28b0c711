use sensordeck_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable naming the screen buffer width in pixels.
pub const WIDTH_VAR: &str = "WIDTH";
/// Environment variable naming the screen buffer height in pixels.
pub const HEIGHT_VAR: &str = "HEIGHT";

/// Dimensions of the fullscreen rendering buffer.
///
/// Sourced from the `WIDTH`/`HEIGHT` environment variables the launcher
/// sets for the process; both are required positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl ScreenConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let width = std::env::var(WIDTH_VAR).ok();
        let height = std::env::var(HEIGHT_VAR).ok();
        Self::from_vars(width.as_deref(), height.as_deref())
    }

    /// Parses the configuration from already-looked-up variable values.
    pub fn from_vars(width: Option<&str>, height: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            width: parse_dimension(WIDTH_VAR, width)?,
            height: parse_dimension(HEIGHT_VAR, height)?,
        })
    }
}

fn parse_dimension(name: &'static str, value: Option<&str>) -> Result<u32, ConfigError> {
    let raw = value.ok_or(ConfigError::MissingEnv(name))?;
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            reason: format!("expected a positive integer, got '{raw}'"),
        })?;
    if parsed == 0 {
        return Err(ConfigError::InvalidEnv {
            name,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(parsed)
}
