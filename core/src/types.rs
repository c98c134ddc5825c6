use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single activity suggestion as returned by the remote API.
///
/// The remote service owns the shape of this object, so it is carried as an
/// opaque JSON value rather than a typed record. Whatever fields the remote
/// sends are handed to the page template unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Activity(pub Value);

impl Activity {
    /// Field lookup on the underlying object. Returns `None` for missing
    /// fields and for non-object payloads.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
