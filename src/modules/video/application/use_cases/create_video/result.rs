use crate::modules::video::domain::VideoId;

/// Result of creating a new video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVideoResult {
    pub video_id: String,
}

impl CreateVideoResult {
    pub fn new(video_id: &VideoId) -> Self {
        Self {
            video_id: video_id.to_string(),
        }
    }
}
