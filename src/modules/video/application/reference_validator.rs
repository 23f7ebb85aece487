use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::cast_member::{CastMemberGateway, CastMemberId};
use crate::modules::category::{CategoryGateway, CategoryId};
use crate::modules::genre::{GenreGateway, GenreId};
use crate::shared::domain::Identifier;
use crate::shared::errors::DomainResult;
use crate::shared::validation::{Error, Notification, ValidationHandler};

/// Cross-aggregate reference-existence check.
///
/// Given the typed id sets a command references, asks each reference
/// gateway which of them exist and reports one error per aggregate kind
/// listing every missing id. All three checks always run; their results are
/// merged into one notification, never short-circuited, so a command
/// referencing a missing category and a missing genre reports both.
///
/// An empty requested list skips the gateway call entirely: there is
/// nothing to resolve, and trivial lookups would only add latency.
pub struct ReferenceValidator {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
}

impl ReferenceValidator {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
        cast_member_gateway: Arc<dyn CastMemberGateway>,
    ) -> Self {
        Self {
            category_gateway,
            genre_gateway,
            cast_member_gateway,
        }
    }

    /// Validate all three reference kinds and merge the results.
    pub async fn validate(
        &self,
        categories: &[CategoryId],
        genres: &[GenreId],
        cast_members: &[CastMemberId],
    ) -> DomainResult<Notification> {
        let mut notification = Notification::new();

        if !categories.is_empty() {
            let found = self.category_gateway.exists_by_ids(categories).await?;
            if let Some(error) = missing_reference_error("categories", categories, &found) {
                notification.append(error)?;
            }
        }
        if !genres.is_empty() {
            let found = self.genre_gateway.exists_by_ids(genres).await?;
            if let Some(error) = missing_reference_error("genres", genres, &found) {
                notification.append(error)?;
            }
        }
        if !cast_members.is_empty() {
            let found = self.cast_member_gateway.exists_by_ids(cast_members).await?;
            if let Some(error) = missing_reference_error("cast members", cast_members, &found) {
                notification.append(error)?;
            }
        }

        Ok(notification)
    }
}

/// Compute `requested − found` and phrase it as a single error listing the
/// missing ids in request order.
fn missing_reference_error<I: Identifier>(
    kind: &str,
    requested: &[I],
    found: &[I],
) -> Option<Error> {
    let found: HashSet<&str> = found.iter().map(Identifier::value).collect();
    let missing: Vec<&str> = requested
        .iter()
        .map(Identifier::value)
        .filter(|value| !found.contains(*value))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(Error::new(format!(
            "Some {} could not be found: {}",
            kind,
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::gateway::MockCastMemberGateway;
    use crate::modules::category::domain::gateway::MockCategoryGateway;
    use crate::modules::genre::domain::gateway::MockGenreGateway;

    fn validator(
        categories: MockCategoryGateway,
        genres: MockGenreGateway,
        members: MockCastMemberGateway,
    ) -> ReferenceValidator {
        ReferenceValidator::new(Arc::new(categories), Arc::new(genres), Arc::new(members))
    }

    #[test]
    fn missing_error_lists_ids_in_request_order() {
        let requested = vec![
            CategoryId::from("123"),
            CategoryId::from("456"),
            CategoryId::from("789"),
        ];
        let found = vec![CategoryId::from("456")];

        let error = missing_reference_error("categories", &requested, &found).unwrap();

        assert_eq!(
            error.message(),
            "Some categories could not be found: 123, 789"
        );
    }

    #[test]
    fn no_error_when_everything_was_found() {
        let requested = vec![CategoryId::from("123")];
        let found = requested.clone();

        assert!(missing_reference_error("categories", &requested, &found).is_none());
    }

    #[tokio::test]
    async fn all_missing_kinds_are_reported_together() {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let mut members = MockCastMemberGateway::new();
        members
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let validator = validator(categories, genres, members);

        let notification = validator
            .validate(
                &[CategoryId::from("c1")],
                &[GenreId::from("g1")],
                &[CastMemberId::from("m1")],
            )
            .await
            .unwrap();

        let messages: Vec<&str> = notification
            .errors()
            .iter()
            .map(|error| error.message())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Some categories could not be found: c1",
                "Some genres could not be found: g1",
                "Some cast members could not be found: m1",
            ]
        );
    }

    #[tokio::test]
    async fn empty_reference_sets_skip_the_gateways() {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids: &[CategoryId]| Ok(ids.to_vec()));
        let mut genres = MockGenreGateway::new();
        genres.expect_exists_by_ids().times(0);
        let mut members = MockCastMemberGateway::new();
        members.expect_exists_by_ids().times(0);
        let validator = validator(categories, genres, members);

        let notification = validator
            .validate(&[CategoryId::from("123")], &[], &[])
            .await
            .unwrap();

        assert!(!notification.has_errors());
    }
}
