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

use super::{command::UpdateVideoCommand, result::UpdateVideoResult};

/// Use case handler for updating a persisted video.
///
/// Same validation and compensation shape as creation, but operating on a
/// fetched aggregate. Media slots absent from the command keep whatever was
/// stored before.
pub struct UpdateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
    event_publisher: Arc<dyn EventPublisher>,
    reference_validator: ReferenceValidator,
}

impl UpdateVideoHandler {
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

        self.video_gateway.update(aggregate).await
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
            format!("An error on update video was observed [videoID: {}]", video_id),
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
impl UseCase<UpdateVideoCommand, UpdateVideoResult> for UpdateVideoHandler {
    async fn execute(&self, command: UpdateVideoCommand) -> DomainResult<UpdateVideoResult> {
        let UpdateVideoCommand {
            id,
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

        let video_id = VideoId::from(id.as_str());
        let mut aggregate = self
            .video_gateway
            .find_by_id(&video_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video", id))?;

        let rating = rating.as_deref().and_then(Rating::of);
        let categories = to_unique_ids(&categories, |s| CategoryId::from(s));
        let genres = to_unique_ids(&genres, |s| GenreId::from(s));
        let cast_members = to_unique_ids(&cast_members, |s| CastMemberId::from(s));

        let mut notification = self
            .reference_validator
            .validate(&categories, &genres, &cast_members)
            .await?;

        aggregate.update(
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
                "Could not update Aggregate Video",
                notification,
            ));
        }

        let mut stored = match self
            .store_media_and_persist(aggregate, video, trailer, banner, thumbnail, thumbnail_half)
            .await
        {
            Ok(stored) => stored,
            Err(err) => return Err(self.compensate(&video_id, err).await),
        };

        self.publish_events(&mut stored).await?;

        log::info!("updated video {}", video_id);
        Ok(UpdateVideoResult::new(&video_id))
    }
}
