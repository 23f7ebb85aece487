use serde::{Deserialize, Serialize};

/// Inbound binary content handed to the media gateway for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    content: Vec<u8>,
    checksum: String,
    content_type: String,
    name: String,
}

impl Resource {
    pub fn new(
        content: Vec<u8>,
        checksum: impl Into<String>,
        content_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            content,
            checksum: checksum.into(),
            content_type: content_type.into(),
            name: name.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Which of the five media slots a resource is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

/// A resource paired with its destination slot, the unit the
/// [`MediaResourceGateway`](super::MediaResourceGateway) stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResource {
    resource: Resource,
    media_type: VideoMediaType,
}

impl VideoResource {
    pub fn new(resource: Resource, media_type: VideoMediaType) -> Self {
        Self {
            resource,
            media_type,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn media_type(&self) -> VideoMediaType {
        self.media_type
    }
}
