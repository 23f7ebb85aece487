use std::hash::Hash;

/// Opaque identifier for an aggregate.
///
/// Each aggregate has its own concrete identifier type. They are all
/// structurally a string, but deliberately not interchangeable, so a
/// `CategoryId` can never be handed to something expecting a `GenreId`.
pub trait Identifier: Clone + Eq + Hash {
    /// The raw string value of this identifier.
    fn value(&self) -> &str;
}

/// Implements the standard surface of a string-backed identifier newtype:
/// `unique()`, `from()`, `Identifier`, `Display`.
macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            /// A fresh, globally unique identifier.
            pub fn unique() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// An identifier from a known string value.
            pub fn from(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl $crate::shared::domain::Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use string_identifier;
