use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult};

/// A single validation failure, represented as data rather than a panic or
/// an early return. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Raised by [`Notification::first_error`] when no error was accumulated.
#[derive(Debug, thiserror::Error)]
#[error("notification contains no errors")]
pub struct EmptyNotification;

/// Strategy seam for consuming validation failures.
///
/// Two policies exist: [`Notification`] accumulates every failure so
/// independent checks all run and report together, while [`FailFast`]
/// rejects on the first appended error, aborting further checks in the
/// caller via `?`.
pub trait ValidationHandler {
    fn append(&mut self, error: Error) -> DomainResult<()>;

    fn errors(&self) -> &[Error];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// Accumulating validation handler. Append never interrupts control flow;
/// errors keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_error(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Fold every error from another notification into this one.
    pub fn merge(&mut self, other: Notification) {
        self.errors.extend(other.errors);
    }

    pub fn first_error(&self) -> Result<&Error, EmptyNotification> {
        self.errors.first().ok_or(EmptyNotification)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Run a fallible check and fold any failure into this notification.
    ///
    /// Validation failures contribute their full error list; any other
    /// failure contributes its display form as a single error. Returns
    /// `None` when the check failed.
    pub fn validate<T>(&mut self, f: impl FnOnce() -> DomainResult<T>) -> Option<T> {
        match f() {
            Ok(value) => Some(value),
            Err(DomainError::Validation { notification, .. }) => {
                self.merge(notification);
                None
            }
            Err(other) => {
                self.errors.push(Error::new(other.to_string()));
                None
            }
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(Error::message).collect();
        f.write_str(&messages.join(", "))
    }
}

/// Fail-fast validation handler. The first appended error becomes a
/// [`DomainError::Validation`] immediately, so `handler.append(..)?` inside
/// a constructor rejects the instance before it ever escapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl ValidationHandler for FailFast {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        let message = error.message().to_string();
        Err(DomainError::validation(
            message,
            Notification::from_error(error),
        ))
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_accumulates_in_order() {
        let mut notification = Notification::new();
        notification.append(Error::new("first")).unwrap();
        notification.append(Error::new("second")).unwrap();

        assert!(notification.has_errors());
        assert_eq!(notification.len(), 2);
        assert_eq!(notification.errors()[0].message(), "first");
        assert_eq!(notification.errors()[1].message(), "second");
        assert_eq!(notification.first_error().unwrap().message(), "first");
    }

    #[test]
    fn first_error_on_empty_notification_fails() {
        let notification = Notification::new();
        assert!(notification.first_error().is_err());
    }

    #[test]
    fn merge_preserves_both_sides() {
        let mut left = Notification::from_error(Error::new("a"));
        let right = Notification::from_error(Error::new("b"));

        left.merge(right);

        assert_eq!(left.len(), 2);
        assert_eq!(left.errors()[1].message(), "b");
    }

    #[test]
    fn validate_folds_validation_failures() {
        let mut notification = Notification::new();

        let result: Option<()> = notification.validate(|| {
            Err(DomainError::validation(
                "boom",
                Notification::from_error(Error::new("boom")),
            ))
        });

        assert!(result.is_none());
        assert_eq!(notification.len(), 1);
        assert_eq!(notification.errors()[0].message(), "boom");
    }

    #[test]
    fn validate_passes_through_success() {
        let mut notification = Notification::new();

        let result = notification.validate(|| Ok(42));

        assert_eq!(result, Some(42));
        assert!(!notification.has_errors());
    }

    #[test]
    fn fail_fast_rejects_on_first_error() {
        let mut handler = FailFast;

        let err = handler.append(Error::new("'name' should not be empty"));

        let err = err.unwrap_err();
        let notification = err.notification().expect("validation error");
        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.errors()[0].message(),
            "'name' should not be empty"
        );
    }

    #[test]
    fn notification_serializes_errors() {
        let notification = Notification::from_error(Error::new("oops"));
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains("oops"));
    }
}
