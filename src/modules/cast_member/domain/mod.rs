pub mod cast_member;
pub mod cast_member_id;
pub mod gateway;

pub use cast_member::{CastMember, CastMemberType};
pub use cast_member_id::CastMemberId;
pub use gateway::CastMemberGateway;
