use serde::{Deserialize, Serialize};
use std::fmt;

/// Window-group tag shared by every window and dialog this process creates,
/// so the compositor associates them with the same application.
///
/// Derived from the numeric process id, so repeated derivations within one
/// process always yield the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGroupId(String);

impl WindowGroupId {
    /// Derives the group id from the current process id.
    pub fn from_process() -> Self {
        Self(std::process::id().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
