use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GenreId;
use crate::modules::category::CategoryId;
use crate::shared::errors::DomainResult;
use crate::shared::validation::{Error, FailFast, ValidationHandler};

const NAME_MAX_LENGTH: usize = 255;

/// Genre aggregate. Holds the categories it is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new(name: impl Into<String>, active: bool) -> DomainResult<Self> {
        let now = Utc::now();
        let genre = Self {
            id: GenreId::unique(),
            name: name.into(),
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        genre.self_validate()?;
        Ok(genre)
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
    ) -> DomainResult<&mut Self> {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.into();
        self.categories = categories;
        self.updated_at = Utc::now();
        self.self_validate()?;
        Ok(self)
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = Utc::now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.active = false;
        self.updated_at = Utc::now();
        self
    }

    pub fn add_category(&mut self, category_id: CategoryId) -> &mut Self {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn remove_category(&mut self, category_id: &CategoryId) -> &mut Self {
        let before = self.categories.len();
        self.categories.retain(|id| id != category_id);
        if self.categories.len() != before {
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            handler.append(Error::new("'name' should not be empty"))?;
        } else if name.chars().count() > NAME_MAX_LENGTH {
            handler.append(Error::new(format!(
                "'name' must be between 1 and {} characters",
                NAME_MAX_LENGTH
            )))?;
        }
        Ok(())
    }

    fn self_validate(&self) -> DomainResult<()> {
        self.validate(&mut FailFast)
    }

    pub fn id(&self) -> &GenreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
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
    fn new_genre_starts_without_categories() {
        let genre = Genre::new("Action", true).unwrap();

        assert_eq!(genre.name(), "Action");
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Genre::new("", true).unwrap_err();
        let notification = err.notification().expect("validation error");
        assert_eq!(
            notification.errors()[0].message(),
            "'name' should not be empty"
        );
    }

    #[test]
    fn add_category_is_idempotent() {
        let mut genre = Genre::new("Action", true).unwrap();
        let category_id = CategoryId::unique();

        genre.add_category(category_id.clone());
        genre.add_category(category_id.clone());

        assert_eq!(genre.categories(), &[category_id]);
    }

    #[test]
    fn remove_category_drops_only_the_given_one() {
        let mut genre = Genre::new("Action", true).unwrap();
        let keep = CategoryId::unique();
        let drop = CategoryId::unique();
        genre.add_category(keep.clone());
        genre.add_category(drop.clone());

        genre.remove_category(&drop);

        assert_eq!(genre.categories(), &[keep]);
    }

    #[test]
    fn update_replaces_categories_wholesale() {
        let mut genre = Genre::new("Action", true).unwrap();
        genre.add_category(CategoryId::unique());
        let replacement = vec![CategoryId::unique()];

        genre
            .update("Adventure", false, replacement.clone())
            .unwrap();

        assert_eq!(genre.name(), "Adventure");
        assert!(!genre.is_active());
        assert_eq!(genre.categories(), replacement.as_slice());
    }
}
