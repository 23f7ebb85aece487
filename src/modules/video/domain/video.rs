use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AudioVideoMedia, ImageMedia, Rating, VideoId, VideoMediaCreatedEvent};
use crate::modules::cast_member::CastMemberId;
use crate::modules::category::CategoryId;
use crate::modules::genre::GenreId;
use crate::shared::domain::Identifier;
use crate::shared::errors::DomainResult;
use crate::shared::validation::{Error, ValidationHandler};

const TITLE_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Video aggregate root.
///
/// Owns three sets of references to collaborating aggregates and up to five
/// optional media slots. Reference sets are never absent, only empty. An
/// instance is exclusively owned by the workflow invocation mutating it, so
/// no synchronization is needed.
///
/// Unlike the simpler aggregates, construction does not reject invalid
/// field values: the creating workflow runs [`Video::validate`] into an
/// accumulating notification so field failures and reference failures are
/// reported together in one round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    title: String,
    description: String,
    launched_at: Option<i32>,
    duration: f64,
    rating: Option<Rating>,
    opened: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    banner: Option<ImageMedia>,
    thumbnail: Option<ImageMedia>,
    thumbnail_half: Option<ImageMedia>,
    trailer: Option<AudioVideoMedia>,
    video: Option<AudioVideoMedia>,
    categories: HashSet<CategoryId>,
    genres: HashSet<GenreId>,
    cast_members: HashSet<CastMemberId>,
    #[serde(skip)]
    events: Vec<VideoMediaCreatedEvent>,
}

impl Video {
    /// Factory for a brand-new video: fresh id, now-timestamps, empty media
    /// slots.
    #[allow(clippy::too_many_arguments)]
    pub fn new_video(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: Option<i32>,
        duration: f64,
        opened: bool,
        published: bool,
        rating: Option<Rating>,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::unique(),
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            created_at: now,
            updated_at: now,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            trailer: None,
            video: None,
            categories,
            genres,
            cast_members,
            events: Vec::new(),
        }
    }

    /// Replace scalar fields and reference sets wholesale. Media slots are
    /// untouched; they are overwritten individually by their setters.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: Option<i32>,
        duration: f64,
        opened: bool,
        published: bool,
        rating: Option<Rating>,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) -> &mut Self {
        self.title = title.into();
        self.description = description.into();
        self.launched_at = launched_at;
        self.duration = duration;
        self.opened = opened;
        self.published = published;
        self.rating = rating;
        self.categories = categories;
        self.genres = genres;
        self.cast_members = cast_members;
        self.updated_at = Utc::now();
        self
    }

    /// Field-rule seam. Every workflow that builds or mutates a video runs
    /// this before deciding whether to persist.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            handler.append(Error::new("'title' should not be empty"))?;
        } else if self.title.chars().count() > TITLE_MAX_LENGTH {
            handler.append(Error::new(format!(
                "'title' must be between 1 and {} characters",
                TITLE_MAX_LENGTH
            )))?;
        }
        if self.description.chars().count() > DESCRIPTION_MAX_LENGTH {
            handler.append(Error::new(format!(
                "'description' must be between 1 and {} characters",
                DESCRIPTION_MAX_LENGTH
            )))?;
        }
        if self.launched_at.is_none() {
            handler.append(Error::new("'launched_at' should not be null"))?;
        }
        if self.rating.is_none() {
            handler.append(Error::new("'rating' should not be null"))?;
        }
        Ok(())
    }

    /// Attach the main video medium. A medium still pending encode registers
    /// a [`VideoMediaCreatedEvent`] for the external encoder.
    pub fn update_video_media(&mut self, media: AudioVideoMedia) -> &mut Self {
        self.register_media_event(&media);
        self.video = Some(media);
        self.updated_at = Utc::now();
        self
    }

    /// Attach the trailer medium. Same event rule as the main video.
    pub fn update_trailer_media(&mut self, media: AudioVideoMedia) -> &mut Self {
        self.register_media_event(&media);
        self.trailer = Some(media);
        self.updated_at = Utc::now();
        self
    }

    pub fn update_banner_media(&mut self, media: ImageMedia) -> &mut Self {
        self.banner = Some(media);
        self.updated_at = Utc::now();
        self
    }

    pub fn update_thumbnail_media(&mut self, media: ImageMedia) -> &mut Self {
        self.thumbnail = Some(media);
        self.updated_at = Utc::now();
        self
    }

    pub fn update_thumbnail_half_media(&mut self, media: ImageMedia) -> &mut Self {
        self.thumbnail_half = Some(media);
        self.updated_at = Utc::now();
        self
    }

    fn register_media_event(&mut self, media: &AudioVideoMedia) {
        if media.is_pending_encode() {
            self.events.push(VideoMediaCreatedEvent::new(
                self.id.value(),
                media.id(),
                media.raw_location(),
            ));
        }
    }

    /// Buffered events, read-only.
    pub fn events(&self) -> &[VideoMediaCreatedEvent] {
        &self.events
    }

    /// Drain the event buffer; called by the owning use case after a
    /// successful persist.
    pub fn take_events(&mut self) -> Vec<VideoMediaCreatedEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn launched_at(&self) -> Option<i32> {
        self.launched_at
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.video.as_ref()
    }

    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.trailer.as_ref()
    }

    pub fn banner(&self) -> Option<&ImageMedia> {
        self.banner.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.thumbnail.as_ref()
    }

    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.thumbnail_half.as_ref()
    }

    pub fn categories(&self) -> &HashSet<CategoryId> {
        &self.categories
    }

    pub fn genres(&self) -> &HashSet<GenreId> {
        &self.genres
    }

    pub fn cast_members(&self) -> &HashSet<CastMemberId> {
        &self.cast_members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::Notification;

    fn valid_video() -> Video {
        Video::new_video(
            "System Design Interviews",
            "An interview deep dive",
            Some(2022),
            120.0,
            false,
            true,
            Some(Rating::L),
            HashSet::from([CategoryId::unique()]),
            HashSet::from([GenreId::unique()]),
            HashSet::from([CastMemberId::unique()]),
        )
    }

    #[test]
    fn new_video_has_empty_media_slots_and_no_events() {
        let video = valid_video();

        assert!(video.video().is_none());
        assert!(video.trailer().is_none());
        assert!(video.banner().is_none());
        assert!(video.thumbnail().is_none());
        assert!(video.thumbnail_half().is_none());
        assert!(video.events().is_empty());
        assert_eq!(video.created_at(), video.updated_at());
    }

    #[test]
    fn valid_video_passes_validation() {
        let mut notification = Notification::new();

        valid_video().validate(&mut notification).unwrap();

        assert!(!notification.has_errors());
    }

    #[test]
    fn empty_title_and_missing_rating_both_reported() {
        let video = Video::new_video(
            "",
            "desc",
            None,
            0.0,
            false,
            false,
            None,
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        );
        let mut notification = Notification::new();

        video.validate(&mut notification).unwrap();

        let messages: Vec<&str> = notification
            .errors()
            .iter()
            .map(|error| error.message())
            .collect();
        assert_eq!(
            messages,
            vec![
                "'title' should not be empty",
                "'launched_at' should not be null",
                "'rating' should not be null",
            ]
        );
    }

    #[test]
    fn oversized_title_is_reported() {
        let video = Video::new_video(
            "a".repeat(256),
            "desc",
            Some(2022),
            10.0,
            false,
            false,
            Some(Rating::L),
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        );
        let mut notification = Notification::new();

        video.validate(&mut notification).unwrap();

        assert_eq!(
            notification.errors()[0].message(),
            "'title' must be between 1 and 255 characters"
        );
    }

    #[test]
    fn update_replaces_reference_sets_wholesale() {
        let mut video = valid_video();
        let categories = HashSet::from([CategoryId::unique()]);

        video.update(
            "New title",
            "New description",
            Some(2023),
            90.0,
            true,
            false,
            Some(Rating::Age12),
            categories.clone(),
            HashSet::new(),
            HashSet::new(),
        );

        assert_eq!(video.title(), "New title");
        assert_eq!(video.categories(), &categories);
        assert!(video.genres().is_empty());
        assert!(video.cast_members().is_empty());
        assert!(video.updated_at() >= video.created_at());
    }

    #[test]
    fn pending_video_media_registers_event() {
        let mut video = valid_video();
        let media = AudioVideoMedia::new("abc", "video.mp4", "/videos/raw");
        let media_id = media.id().to_string();

        video.update_video_media(media);

        assert_eq!(video.events().len(), 1);
        let event = &video.events()[0];
        assert_eq!(event.video_id, video.id().to_string());
        assert_eq!(event.resource_id, media_id);
        assert_eq!(event.file_path, "/videos/raw");
    }

    #[test]
    fn processing_media_registers_no_event() {
        let mut video = valid_video();
        let media = AudioVideoMedia::new("abc", "video.mp4", "/videos/raw").processing();

        video.update_video_media(media);

        assert!(video.events().is_empty());
    }

    #[test]
    fn trailer_media_registers_event_when_pending() {
        let mut video = valid_video();

        video.update_trailer_media(AudioVideoMedia::new("abc", "trailer.mp4", "/trailers/raw"));

        assert_eq!(video.events().len(), 1);
    }

    #[test]
    fn image_media_setters_never_register_events() {
        let mut video = valid_video();

        video.update_banner_media(ImageMedia::new("abc", "banner.png", "/images"));
        video.update_thumbnail_media(ImageMedia::new("def", "thumb.png", "/images"));
        video.update_thumbnail_half_media(ImageMedia::new("ghi", "half.png", "/images"));

        assert!(video.events().is_empty());
        assert!(video.banner().is_some());
        assert!(video.thumbnail().is_some());
        assert!(video.thumbnail_half().is_some());
    }

    #[test]
    fn take_events_drains_the_buffer() {
        let mut video = valid_video();
        video.update_video_media(AudioVideoMedia::new("abc", "video.mp4", "/raw"));

        let events = video.take_events();

        assert_eq!(events.len(), 1);
        assert!(video.events().is_empty());
    }
}
