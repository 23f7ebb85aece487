use crate::modules::video::domain::MediaStatus;

/// Command carried by an encoding-completion callback from the external
/// encoder service.
#[derive(Debug, Clone)]
pub struct UpdateMediaStatusCommand {
    pub status: MediaStatus,
    pub video_id: String,
    pub resource_id: String,
    pub folder: String,
    pub filename: String,
}
