use crate::modules::video::domain::Resource;

/// Command for updating an existing video.
///
/// Media fields carry overwrite semantics: a present field replaces the
/// stored medium, an absent field leaves the stored medium untouched.
/// Omission is not deletion.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: String,
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
