use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::DomainEvent;

/// A medium needing encoding was attached to a video.
///
/// Downstream this reaches the external encoder, which later calls back
/// through the update-media-status workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMediaCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub video_id: String,
    pub resource_id: String,
    pub file_path: String,
}

impl VideoMediaCreatedEvent {
    pub fn new(
        video_id: impl Into<String>,
        resource_id: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            occurred_at: Utc::now(),
            video_id: video_id.into(),
            resource_id: resource_id.into(),
            file_path: file_path.into(),
        }
    }
}

impl DomainEvent for VideoMediaCreatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "VideoMediaCreated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_its_payload() {
        let event = VideoMediaCreatedEvent::new("vid-1", "media-1", "/videos/raw/file.mp4");

        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("vid-1"));
        assert!(json.contains("/videos/raw/file.mp4"));
        assert_eq!(event.event_type(), "VideoMediaCreated");
    }
}
