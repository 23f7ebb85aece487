use serde::{Deserialize, Serialize};

/// Encoding state of an audio/video medium.
///
/// Transitions run one way: `Pending -> Processing -> Completed`, driven by
/// callbacks from the external encoder. Each transition produces a new
/// immutable [`AudioVideoMedia`](super::AudioVideoMedia) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
}
