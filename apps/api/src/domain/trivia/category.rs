use serde::Serialize;
use std::collections::BTreeMap;

/// A trivia category (read-only through the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    /// Display label, exposed as `type` on the wire
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Builds the `id -> label` mapping returned by the category endpoints.
///
/// Keys are serialized as JSON object keys (`{"1": "Science"}`).
pub fn category_labels<'a, I>(categories: I) -> BTreeMap<i32, String>
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_as_string_keys() {
        let categories = vec![Category::new(2, "Art"), Category::new(1, "Science")];

        let json = serde_json::to_value(category_labels(&categories)).unwrap();

        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "type": "Geography"}));
    }
}
