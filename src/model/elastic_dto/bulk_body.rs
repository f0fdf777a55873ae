use crate::common::*;

use crate::errors::es_oper_error::*;

use crate::model::elastic_dto::elastic_source_parser::UpdateDoc;

/// ndjson lines of a bulk request. Each entry is one line, kept as written.
#[derive(Debug, Default, Clone)]
pub struct BulkBody {
    lines: Vec<Box<RawValue>>,
}

impl BulkBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn push_line<S: Serialize + ?Sized>(&mut self, line: &S) -> Result<(), EsOperError> {
        self.lines.push(RawValue::from_string(serde_json::to_string(line)?)?);
        Ok(())
    }

    fn action(
        &mut self,
        action: &str,
        index: Option<&str>,
        id: Option<&str>,
    ) -> Result<(), EsOperError> {
        let mut meta: serde_json::Map<String, Value> = serde_json::Map::new();

        if let Some(index) = index {
            meta.insert("_index".to_string(), Value::from(index));
        }
        if let Some(id) = id {
            meta.insert("_id".to_string(), Value::from(id));
        }

        let mut line: serde_json::Map<String, Value> = serde_json::Map::new();
        line.insert(action.to_string(), Value::Object(meta));
        self.push_line(&line)
    }

    #[doc = "`index` action followed by the document source."]
    pub fn index<S: Serialize>(
        &mut self,
        index: Option<&str>,
        id: Option<&str>,
        doc: &S,
    ) -> Result<(), EsOperError> {
        self.action("index", index, id)?;
        self.push_line(doc)
    }

    pub fn create<S: Serialize>(
        &mut self,
        index: Option<&str>,
        id: &str,
        doc: &S,
    ) -> Result<(), EsOperError> {
        self.action("create", index, Some(id))?;
        self.push_line(doc)
    }

    #[doc = "`update` action with a partial `doc`."]
    pub fn update<S: Serialize>(
        &mut self,
        index: Option<&str>,
        id: &str,
        doc: &S,
    ) -> Result<(), EsOperError> {
        self.action("update", index, Some(id))?;
        self.push_line(&UpdateDoc { doc })
    }

    pub fn delete(&mut self, index: Option<&str>, id: &str) -> Result<(), EsOperError> {
        self.action("delete", index, Some(id))
    }

    #[doc = "Appends already serialized ndjson; every non-blank line must be a JSON value."]
    pub fn push_raw(&mut self, ndjson: &str) -> Result<(), EsOperError> {
        for line in ndjson.lines().filter(|line| !line.trim().is_empty()) {
            self.lines.push(RawValue::from_string(line.trim().to_string())?);
        }
        Ok(())
    }

    pub(crate) fn into_lines(self) -> Vec<JsonBody<Box<RawValue>>> {
        self.lines.into_iter().map(JsonBody::new).collect()
    }

    #[doc = "The body as it goes over the wire."]
    pub fn to_ndjson(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}\n", line.get()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Book {
        author: String,
        title: String,
    }

    #[test]
    fn writes_action_and_source_lines() {
        let mut body = BulkBody::new();
        let book = Book {
            author: "Banks".to_string(),
            title: "Excession".to_string(),
        };

        body.index(None, Some("1"), &book).unwrap();
        body.update(None, "2", &json!({ "title": "Matter" })).unwrap();
        body.delete(None, "3").unwrap();

        assert_eq!(body.len(), 5);
        assert_eq!(
            body.to_ndjson(),
            concat!(
                "{\"index\":{\"_id\":\"1\"}}\n",
                "{\"author\":\"Banks\",\"title\":\"Excession\"}\n",
                "{\"update\":{\"_id\":\"2\"}}\n",
                "{\"doc\":{\"title\":\"Matter\"}}\n",
                "{\"delete\":{\"_id\":\"3\"}}\n",
            )
        );
    }

    #[test]
    fn push_raw_skips_blank_lines_and_rejects_garbage() {
        let mut body = BulkBody::new();

        body.push_raw("{\"delete\":{\"_id\":\"9\",\"_index\":\"books\"}}\n\n{\"title\":\"Matter\",\"author\":\"Banks\"}\n")
            .unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(
            body.to_ndjson(),
            "{\"delete\":{\"_id\":\"9\",\"_index\":\"books\"}}\n{\"title\":\"Matter\",\"author\":\"Banks\"}\n"
        );

        assert!(matches!(
            body.push_raw("not json"),
            Err(EsOperError::Json(_))
        ));
    }
}
