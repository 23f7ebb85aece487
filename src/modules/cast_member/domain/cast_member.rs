use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CastMemberId;
use crate::shared::errors::DomainResult;
use crate::shared::validation::{Error, FailFast, ValidationHandler};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

/// Cast member aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    member_type: CastMemberType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(name: impl Into<String>, member_type: CastMemberType) -> DomainResult<Self> {
        let now = Utc::now();
        let member = Self {
            id: CastMemberId::unique(),
            name: name.into(),
            member_type,
            created_at: now,
            updated_at: now,
        };
        member.self_validate()?;
        Ok(member)
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        member_type: CastMemberType,
    ) -> DomainResult<&mut Self> {
        self.name = name.into();
        self.member_type = member_type;
        self.updated_at = Utc::now();
        self.self_validate()?;
        Ok(self)
    }

    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            handler.append(Error::new("'name' should not be empty"))?;
        } else {
            let length = name.chars().count();
            if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
                handler.append(Error::new(format!(
                    "'name' must be between {} and {} characters",
                    NAME_MIN_LENGTH, NAME_MAX_LENGTH
                )))?;
            }
        }
        Ok(())
    }

    fn self_validate(&self) -> DomainResult<()> {
        self.validate(&mut FailFast)
    }

    pub fn id(&self) -> &CastMemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_type(&self) -> CastMemberType {
        self.member_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
