use crate::modules::video::domain::Resource;

/// Command for creating a new video.
///
/// Scalar fields that the caller may omit arrive as `None` and are reported
/// by aggregate validation, not rejected at parse time. The five media
/// fields are all optional; reference id lists may be empty.
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}
