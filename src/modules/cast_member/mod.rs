pub mod domain;

pub use domain::{CastMember, CastMemberGateway, CastMemberId, CastMemberType};
