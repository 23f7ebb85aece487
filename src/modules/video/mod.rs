pub mod application;
pub mod domain;

pub use domain::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, MediaStatus, Rating, Resource, Video,
    VideoGateway, VideoId, VideoMediaType, VideoResource,
};
