pub mod audio_video_media;
pub mod events;
pub mod gateways;
pub mod image_media;
pub mod media_status;
pub mod rating;
pub mod resource;
pub mod video;
pub mod video_id;

pub use audio_video_media::AudioVideoMedia;
pub use events::VideoMediaCreatedEvent;
pub use gateways::{MediaResourceGateway, VideoGateway};
pub use image_media::ImageMedia;
pub use media_status::MediaStatus;
pub use rating::Rating;
pub use resource::{Resource, VideoMediaType, VideoResource};
pub use video::Video;
pub use video_id::VideoId;
