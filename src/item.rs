use super::*;

/// A single API record, kept as the field map the API returned so that
/// irregular shapes survive untouched into the table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct Item {
  fields: Map<String, Value>,
}

impl From<Map<String, Value>> for Item {
  fn from(fields: Map<String, Value>) -> Self {
    Self { fields }
  }
}

impl Item {
  pub(crate) fn fields(&self) -> &Map<String, Value> {
    &self.fields
  }

  pub(crate) fn get(&self, field: &str) -> Option<&Value> {
    self.fields.get(field)
  }

  pub(crate) fn id(&self) -> Option<u64> {
    self.fields.get("id").and_then(Value::as_u64)
  }

  pub(crate) fn insert(&mut self, field: &str, value: impl Into<Value>) {
    self.fields.insert(field.to_string(), value.into());
  }

  pub(crate) fn kids(&self) -> Vec<u64> {
    match self.fields.get("kids") {
      Some(Value::Array(kids)) => kids.iter().filter_map(Value::as_u64).collect(),
      _ => Vec::new(),
    }
  }

  pub(crate) fn number(&self, field: &str) -> Option<f64> {
    self.fields.get(field).and_then(Value::as_f64)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn item(value: Value) -> Item {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn deserializes_api_record_keeping_field_order() {
    let story = item(json!({
      "by": "pg",
      "descendants": 15,
      "id": 1,
      "kids": [15, 234_509],
      "score": 57,
      "title": "Y Combinator",
    }));

    assert_eq!(
      story.fields().keys().collect::<Vec<_>>(),
      ["by", "descendants", "id", "kids", "score", "title"]
    );

    assert_eq!(story.id(), Some(1));
    assert_eq!(story.kids(), vec![15, 234_509]);
    assert_eq!(story.number("score"), Some(57.0));
  }

  #[test]
  fn kids_is_empty_when_absent_or_null() {
    assert!(item(json!({ "id": 1 })).kids().is_empty());
    assert!(item(json!({ "id": 1, "kids": null })).kids().is_empty());
  }

  #[test]
  fn number_ignores_missing_and_non_numeric_fields() {
    let story = item(json!({ "id": 1, "score": null, "title": "hi" }));

    assert_eq!(story.number("score"), None);
    assert_eq!(story.number("title"), None);
    assert_eq!(story.number("descendants"), None);
  }

  #[test]
  fn insert_appends_new_field_last() {
    let mut comment = item(json!({ "id": 8, "parent": 1 }));

    comment.insert("story_id", 1);

    assert_eq!(comment.get("story_id"), Some(&json!(1)));
    assert_eq!(
      comment.fields().keys().next_back().map(String::as_str),
      Some("story_id")
    );
  }

  #[test]
  fn id_requires_an_integer() {
    assert_eq!(item(json!({ "id": "8" })).id(), None);
    assert_eq!(item(json!({})).id(), None);
  }
}
