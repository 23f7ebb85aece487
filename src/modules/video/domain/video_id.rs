use crate::shared::domain::identifier::string_identifier;

string_identifier! {
    /// Identifier of a [`Video`](super::Video) aggregate.
    VideoId
}
