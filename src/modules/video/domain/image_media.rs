use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Immutable descriptor of a stored image asset. Images need no encoding,
/// so there is no status machine. Equality is by `(checksum, location)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMedia {
    id: String,
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::with(uuid::Uuid::new_v4().to_string(), checksum, name, location)
    }

    pub fn with(
        id: impl Into<String>,
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl PartialEq for ImageMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl Eq for ImageMedia {}

impl Hash for ImageMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}
