use crate::shared::domain::identifier::string_identifier;

string_identifier! {
    /// Identifier of a [`Genre`](super::Genre) aggregate.
    GenreId
}
