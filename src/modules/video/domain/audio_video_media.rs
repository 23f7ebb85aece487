use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::MediaStatus;

/// Immutable descriptor of a stored audio/video asset.
///
/// Semantic identity is `(checksum, raw_location)`: two descriptors for the
/// same source content at the same location are the same media, whatever
/// their ids or display names. Anything deduplicating or caching media must
/// rely on this, which is why equality and hashing are restricted to those
/// two fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    id: String,
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// A freshly stored medium, not yet picked up by the encoder.
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self::with(
            uuid::Uuid::new_v4().to_string(),
            checksum,
            name,
            raw_location,
            "",
            MediaStatus::Pending,
        )
    }

    pub fn with(
        id: impl Into<String>,
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
        encoded_location: impl Into<String>,
        status: MediaStatus,
    ) -> Self {
        Self {
            id: id.into(),
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: encoded_location.into(),
            status,
        }
    }

    /// Transition to `Processing`. Idempotent.
    pub fn processing(self) -> Self {
        Self {
            status: MediaStatus::Processing,
            ..self
        }
    }

    /// Transition to `Completed`, recording where the encoder wrote the
    /// result.
    pub fn completed(self, encoded_path: impl Into<String>) -> Self {
        Self {
            encoded_location: encoded_path.into(),
            status: MediaStatus::Completed,
            ..self
        }
    }

    pub fn is_pending_encode(&self) -> bool {
        self.status == MediaStatus::Pending
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

    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.raw_location == other.raw_location
    }
}

impl Eq for AudioVideoMedia {}

impl Hash for AudioVideoMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.raw_location.hash(state);
    }
}
