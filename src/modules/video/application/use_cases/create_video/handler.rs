use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::{CastMemberGateway, CastMemberId};
use crate::modules::category::{CategoryGateway, CategoryId};
use crate::modules::genre::{GenreGateway, GenreId};
use crate::modules::video::application::ports::EventPublisher;
use crate::modules::video::application::reference_validator::ReferenceValidator;
use crate::modules::video::application::use_cases::to_unique_ids;
use crate::modules::video::domain::{
    MediaResourceGateway, Rating, Resource, Video, VideoGateway, VideoId, VideoMediaType,
    VideoResource,
};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::DomainEvent;
use crate::shared::errors::{DomainError, DomainResult};
use crate::shared::validation::ValidationHandler;

use super::{command::CreateVideoCommand, result::CreateVideoResult};

/// Use case handler for creating a new video.
///
/// Field validation and reference-existence checks are accumulated and
/// reported together; only a command that passes both reaches the media
/// gateway. Any failure after media may have been stored triggers a
/// best-effort cleanup of everything stored for the new video id before the
/// failure is re-raised.
pub struct CreateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
    event_publisher: Arc<dyn EventPublisher>,
    reference_validator: ReferenceValidator,
}

impl CreateVideoHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        media_resource_gateway: Arc<dyn MediaResourceGateway>,
        event_publisher: Arc<dyn EventPublisher>,
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
        cast_member_gateway: Arc<dyn CastMemberGateway>,
    ) -> Self {
        Self {
            video_gateway,
            media_resource_gateway,
            event_publisher,
            reference_validator: ReferenceValidator::new(
                category_gateway,
                genre_gateway,
                cast_member_gateway,
            ),
        }
    }

    /// Store each attached medium, then persist the aggregate. Called only
    /// after validation has passed; any failure here is subject to
    /// compensation by the caller.
    async fn store_media_and_persist(
        &self,
        mut aggregate: Video,
        video: Option<Resource>,
        trailer: Option<Resource>,
        banner: Option<Resource>,
        thumbnail: Option<Resource>,
        thumbnail_half: Option<Resource>,
    ) -> DomainResult<Video> {
        let id = aggregate.id().clone();

        if let Some(resource) = video {
            let media = self
                .media_resource_gateway
                .store_audio_video(&id, VideoResource::new(resource, VideoMediaType::Video))
                .await?;
            aggregate.update_video_media(media);
        }
        if let Some(resource) = trailer {
            let media = self
                .media_resource_gateway
                .store_audio_video(&id, VideoResource::new(resource, VideoMediaType::Trailer))
                .await?;
            aggregate.update_trailer_media(media);
        }
        if let Some(resource) = banner {
            let media = self
                .media_resource_gateway
                .store_image(&id, VideoResource::new(resource, VideoMediaType::Banner))
                .await?;
            aggregate.update_banner_media(media);
        }
        if let Some(resource) = thumbnail {
            let media = self
                .media_resource_gateway
                .store_image(&id, VideoResource::new(resource, VideoMediaType::Thumbnail))
                .await?;
            aggregate.update_thumbnail_media(media);
        }
        if let Some(resource) = thumbnail_half {
            let media = self
                .media_resource_gateway
                .store_image(
                    &id,
                    VideoResource::new(resource, VideoMediaType::ThumbnailHalf),
                )
                .await?;
            aggregate.update_thumbnail_half_media(media);
        }

        self.video_gateway.create(aggregate).await
    }

    async fn compensate(&self, video_id: &VideoId, err: DomainError) -> DomainError {
        if let Err(cleanup) = self.media_resource_gateway.clear_resources(video_id).await {
            log::warn!(
                "failed to clear stored media for video {}: {}",
                video_id,
                cleanup
            );
        }
        DomainError::internal(
            format!("An error on create video was observed [videoID: {}]", video_id),
            err,
        )
    }

    async fn publish_events(&self, aggregate: &mut Video) -> DomainResult<()> {
        let events = aggregate.take_events();
        if events.is_empty() {
            return Ok(());
        }
        let events: Vec<Box<dyn DomainEvent>> = events
            .into_iter()
            .map(|event| Box::new(event) as Box<dyn DomainEvent>)
            .collect();
        self.event_publisher.publish_all(events).await
    }
}

#[async_trait]
impl UseCase<CreateVideoCommand, CreateVideoResult> for CreateVideoHandler {
    async fn execute(&self, command: CreateVideoCommand) -> DomainResult<CreateVideoResult> {
        let CreateVideoCommand {
            title,
            description,
            launched_at,
            duration,
            opened,
            published,
            rating,
            categories,
            genres,
            cast_members,
            video,
            trailer,
            banner,
            thumbnail,
            thumbnail_half,
        } = command;

        // Permissive parse: an unknown rating label becomes None and is
        // reported by aggregate validation alongside everything else.
        let rating = rating.as_deref().and_then(Rating::of);
        let categories = to_unique_ids(&categories, |s| CategoryId::from(s));
        let genres = to_unique_ids(&genres, |s| GenreId::from(s));
        let cast_members = to_unique_ids(&cast_members, |s| CastMemberId::from(s));

        let mut notification = self
            .reference_validator
            .validate(&categories, &genres, &cast_members)
            .await?;

        let aggregate = Video::new_video(
            title.unwrap_or_default(),
            description.unwrap_or_default(),
            launched_at,
            duration,
            opened,
            published,
            rating,
            categories.into_iter().collect(),
            genres.into_iter().collect(),
            cast_members.into_iter().collect(),
        );
        aggregate.validate(&mut notification)?;

        if notification.has_errors() {
            return Err(DomainError::validation(
                "Could not create Aggregate Video",
                notification,
            ));
        }

        let video_id = aggregate.id().clone();
        let mut stored = match self
            .store_media_and_persist(aggregate, video, trailer, banner, thumbnail, thumbnail_half)
            .await
        {
            Ok(stored) => stored,
            Err(err) => return Err(self.compensate(&video_id, err).await),
        };

        self.publish_events(&mut stored).await?;

        log::info!("created video {}", video_id);
        Ok(CreateVideoResult::new(&video_id))
    }
}
