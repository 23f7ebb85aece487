use async_trait::async_trait;

use super::{AudioVideoMedia, ImageMedia, Video, VideoId, VideoResource};
use crate::shared::errors::DomainResult;

/// Port (interface) for video metadata persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGateway: Send + Sync {
    async fn create(&self, video: Video) -> DomainResult<Video>;

    async fn update(&self, video: Video) -> DomainResult<Video>;

    async fn find_by_id(&self, id: &VideoId) -> DomainResult<Option<Video>>;
}

/// Port (interface) for binary media storage (object storage in
/// infrastructure).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// Store an audio/video binary and return its descriptor, Pending
    /// encode.
    async fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> DomainResult<AudioVideoMedia>;

    /// Store an image binary and return its descriptor.
    async fn store_image(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> DomainResult<ImageMedia>;

    /// Delete every stored resource for the given video.
    ///
    /// Must be idempotent and safe when zero or only some of the media
    /// exist: the failure path of the create/update workflows calls it
    /// unconditionally.
    async fn clear_resources(&self, video_id: &VideoId) -> DomainResult<()>;
}
