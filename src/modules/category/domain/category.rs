use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CategoryId;
use crate::shared::errors::DomainResult;
use crate::shared::validation::{Error, FailFast, ValidationHandler};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Category aggregate.
///
/// Self-validating: every factory and mutator re-runs [`Category::validate`]
/// through a [`FailFast`] handler before returning, so a live reference is
/// always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let category = Self {
            id: CategoryId::unique(),
            name: name.into(),
            description: description.into(),
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        category.self_validate()?;
        Ok(category)
    }

    /// Rebuild a persisted category without re-assigning id or timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
    ) -> DomainResult<&mut Self> {
        if active {
            self.activate()?;
        } else {
            self.deactivate()?;
        }
        self.name = name.into();
        self.description = description.into();
        self.updated_at = Utc::now();
        self.self_validate()?;
        Ok(self)
    }

    pub fn activate(&mut self) -> DomainResult<&mut Self> {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = Utc::now();
        self.self_validate()?;
        Ok(self)
    }

    pub fn deactivate(&mut self) -> DomainResult<&mut Self> {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.active = false;
        self.updated_at = Utc::now();
        self.self_validate()?;
        Ok(self)
    }

    /// Field-rule seam, run by every factory and mutator.
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

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_is_valid_and_timestamped() {
        let category = Category::new("Movies", "Feature films", true).unwrap();

        assert_eq!(category.name(), "Movies");
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert_eq!(category.created_at(), category.updated_at());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Category::new("  ", "whatever", true).unwrap_err();
        let notification = err.notification().expect("validation error");
        assert_eq!(
            notification.errors()[0].message(),
            "'name' should not be empty"
        );
    }

    #[test]
    fn short_name_is_rejected() {
        let err = Category::new("ab", "", true).unwrap_err();
        let notification = err.notification().expect("validation error");
        assert_eq!(
            notification.errors()[0].message(),
            "'name' must be between 3 and 255 characters"
        );
    }

    #[test]
    fn deactivate_marks_deleted() {
        let mut category = Category::new("Movies", "", true).unwrap();

        category.deactivate().unwrap();

        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());
    }

    #[test]
    fn activate_clears_deleted_at() {
        let mut category = Category::new("Movies", "", false).unwrap();
        assert!(category.deleted_at().is_some());

        category.activate().unwrap();

        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
    }

    #[test]
    fn update_rejects_invalid_name_before_returning() {
        let mut category = Category::new("Movies", "", true).unwrap();

        assert!(category.update("", "desc", true).is_err());
    }
}
