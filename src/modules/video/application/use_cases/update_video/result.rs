use crate::modules::video::domain::VideoId;

/// Result of updating a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVideoResult {
    pub video_id: String,
}

impl UpdateVideoResult {
    pub fn new(video_id: &VideoId) -> Self {
        Self {
            video_id: video_id.to_string(),
        }
    }
}
