use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{AudioVideoMedia, MediaStatus, VideoGateway, VideoId};
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::UpdateMediaStatusCommand;

/// Use case handler for encoding-status callbacks.
///
/// A callback whose resource id matches neither the main video nor the
/// trailer is a no-op, not an error: encoder callbacks can arrive late or
/// duplicated, after the medium they refer to was already replaced.
pub struct UpdateMediaStatusHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl UpdateMediaStatusHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

/// Apply the callback status to a medium. `None` means nothing to do: a
/// `Pending` callback reports a state the medium was born in.
fn transition(
    media: AudioVideoMedia,
    status: MediaStatus,
    encoded_path: &str,
) -> Option<AudioVideoMedia> {
    match status {
        MediaStatus::Pending => None,
        MediaStatus::Processing => Some(media.processing()),
        MediaStatus::Completed => Some(media.completed(encoded_path)),
    }
}

#[async_trait]
impl UseCase<UpdateMediaStatusCommand, ()> for UpdateMediaStatusHandler {
    async fn execute(&self, command: UpdateMediaStatusCommand) -> DomainResult<()> {
        let video_id = VideoId::from(command.video_id.as_str());
        let mut video = self
            .video_gateway
            .find_by_id(&video_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video", command.video_id.clone()))?;

        // Literal join, no normalization: the encoder owns the layout.
        let encoded_path = format!("{}/{}", command.folder, command.filename);

        let main = video
            .video()
            .filter(|media| media.id() == command.resource_id)
            .cloned();
        let trailer = video
            .trailer()
            .filter(|media| media.id() == command.resource_id)
            .cloned();

        if let Some(media) = main {
            let Some(updated) = transition(media, command.status, &encoded_path) else {
                return Ok(());
            };
            video.update_video_media(updated);
        } else if let Some(media) = trailer {
            let Some(updated) = transition(media, command.status, &encoded_path) else {
                return Ok(());
            };
            video.update_trailer_media(updated);
        } else {
            log::debug!(
                "ignoring media status callback for unknown resource {} on video {}",
                command.resource_id,
                video_id
            );
            return Ok(());
        }

        self.video_gateway.update(video).await?;
        Ok(())
    }
}
