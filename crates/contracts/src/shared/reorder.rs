use serde::{Deserialize, Serialize};

/// Один элемент тела запроса `POST .../reorder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub order: u32,
}

impl ReorderEntry {
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_mongo_style_id() {
        let body = serde_json::to_string(&vec![ReorderEntry::new("a", 0)]).unwrap();
        assert_eq!(body, r#"[{"_id":"a","order":0}]"#);
    }
}
