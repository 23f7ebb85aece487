use crate::shared::domain::identifier::string_identifier;

string_identifier! {
    /// Identifier of a [`Category`](super::Category) aggregate.
    CategoryId
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::Identifier;

    #[test]
    fn unique_ids_differ() {
        assert_ne!(CategoryId::unique(), CategoryId::unique());
    }

    #[test]
    fn from_keeps_value() {
        let id = CategoryId::from("123");
        assert_eq!(id.value(), "123");
        assert_eq!(id, CategoryId::from("123"));
    }
}
