pub mod errors;
pub mod group;

pub use errors::{ConfigError, PlatformError, SensordeckError};
pub use group::WindowGroupId;

pub type Result<T> = std::result::Result<T, SensordeckError>;
