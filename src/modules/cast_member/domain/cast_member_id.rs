use crate::shared::domain::identifier::string_identifier;

string_identifier! {
    /// Identifier of a [`CastMember`](super::CastMember) aggregate.
    CastMemberId
}
