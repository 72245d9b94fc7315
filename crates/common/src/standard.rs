use serde::{Deserialize, Deserializer, Serialize};

/// Columns selected when fetching a standard. The embedding column is never
/// part of the projection.
pub const STANDARD_FIELDS: [&str; 12] = [
    "id",
    "description",
    "jurisdiction_id",
    "jurisdiction_title",
    "list_id",
    "position",
    "standard_set_id",
    "standard_set_title",
    "standard_set_status",
    "statement_notation",
    "subject",
    "ancestor_ids",
];

/// A curricular standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    /// Globally unique identifier
    #[serde(deserialize_with = "ident::text")]
    pub id: String,

    /// Statement text
    #[serde(default)]
    pub description: Option<String>,

    /// Owning jurisdiction
    #[serde(default, deserialize_with = "ident::optional")]
    pub jurisdiction_id: Option<String>,

    #[serde(default)]
    pub jurisdiction_title: Option<String>,

    #[serde(default, deserialize_with = "ident::optional")]
    pub list_id: Option<String>,

    /// Ordering hint within the list
    #[serde(default)]
    pub position: Option<i64>,

    #[serde(default, deserialize_with = "ident::optional")]
    pub standard_set_id: Option<String>,

    #[serde(default)]
    pub standard_set_title: Option<String>,

    #[serde(default)]
    pub standard_set_status: Option<String>,

    /// Statement code, e.g. "CCSS.Math.Content.3.OA.A.1"
    #[serde(default)]
    pub statement_notation: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    /// Hierarchy path from the root of the outline down to the parent
    #[serde(default, deserialize_with = "ident::list")]
    pub ancestor_ids: Vec<String>,
}

impl Standard {
    /// Create a standard with only the identifier set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            jurisdiction_id: None,
            jurisdiction_title: None,
            list_id: None,
            position: None,
            standard_set_id: None,
            standard_set_title: None,
            standard_set_status: None,
            statement_notation: None,
            subject: None,
            ancestor_ids: Vec::new(),
        }
    }

    /// Set the owning jurisdiction
    pub fn with_jurisdiction(
        mut self,
        jurisdiction_id: impl Into<String>,
        jurisdiction_title: impl Into<String>,
    ) -> Self {
        self.jurisdiction_id = Some(jurisdiction_id.into());
        self.jurisdiction_title = Some(jurisdiction_title.into());
        self
    }

    /// Set the statement text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A stored standard together with its embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardRow {
    #[serde(flatten)]
    pub standard: Standard,

    /// Fixed-dimension embedding, absent for records that were never embedded
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl StandardRow {
    pub fn new(standard: Standard, embedding: Option<Vec<f32>>) -> Self {
        Self { standard, embedding }
    }
}

/// A standard scored against one source embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(flatten)]
    pub standard: Standard,

    /// One minus cosine distance to the source embedding
    pub similarity: f64,
}

impl MatchCandidate {
    pub fn new(standard: Standard, similarity: f64) -> Self {
        Self {
            standard,
            similarity,
        }
    }
}

/// Identifier columns may hold text or numbers; both decode to `String`.
mod ident {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    impl From<RawId> for String {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(text) => text,
                RawId::Number(number) => number.to_string(),
            }
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        RawId::deserialize(deserializer).map(String::from)
    }

    pub fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
    }

    /// `null` is an empty path
    pub fn list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let ids = Option::<Vec<RawId>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(ids.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_serializes_every_projected_field() {
        let standard = Standard::new("S1").with_jurisdiction("J1", "Ohio");
        let value = serde_json::to_value(&standard).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), STANDARD_FIELDS.len());
        for field in STANDARD_FIELDS {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object["description"], serde_json::Value::Null);
        assert_eq!(object["ancestor_ids"], serde_json::json!([]));
    }

    #[test]
    fn test_candidate_flattens_standard() {
        let candidate = MatchCandidate::new(Standard::new("S2"), 0.9);
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["id"], "S2");
        assert_eq!(value["similarity"], 0.9);
    }

    #[test]
    fn test_row_deserializes_without_embedding() {
        let row: StandardRow =
            serde_json::from_str(r#"{"id": "S3", "jurisdiction_id": "J1"}"#).unwrap();
        assert_eq!(row.standard.id, "S3");
        assert_eq!(row.standard.jurisdiction_id.as_deref(), Some("J1"));
        assert!(row.embedding.is_none());
    }

    #[test]
    fn test_numeric_identifiers_decode_as_text() {
        let row: StandardRow = serde_json::from_str(
            r#"{
                "id": 1042,
                "jurisdiction_id": 7,
                "list_id": null,
                "standard_set_id": "SET-1",
                "ancestor_ids": [1, "root", 2.5],
                "embedding": [0.5, 0.5]
            }"#,
        )
        .unwrap();

        assert_eq!(row.standard.id, "1042");
        assert_eq!(row.standard.jurisdiction_id.as_deref(), Some("7"));
        assert!(row.standard.list_id.is_none());
        assert_eq!(row.standard.standard_set_id.as_deref(), Some("SET-1"));
        assert_eq!(row.standard.ancestor_ids, vec!["1", "root", "2.5"]);
        assert_eq!(row.embedding, Some(vec![0.5, 0.5]));
    }

    #[test]
    fn test_null_ancestors_are_empty() {
        let standard: Standard =
            serde_json::from_str(r#"{"id": "S4", "ancestor_ids": null}"#).unwrap();
        assert!(standard.ancestor_ids.is_empty());
        assert!(serde_json::from_str::<Standard>(r#"{"id": true}"#).is_err());
    }
}
